use log::info;
use opencv::{core::Mat, prelude::*};

use crate::contours;
use crate::display::DisplaySink;
use crate::error::Result;
use crate::extract;
use crate::input::InputSource;
use crate::preprocess;

/// Everything that configures a run; the pipeline touches no other state.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub source: InputSource,
}

/// Run the whole detect-rotate-crop pass over one image and return the
/// crops in processing order. The first failure aborts the run; there is no
/// per-contour recovery.
pub fn run(config: &PipelineConfig, sink: &mut dyn DisplaySink) -> Result<Vec<Mat>> {
    let image = config.source.load()?;
    info!("Image type {}", image.typ());

    // The grayscale image replaces the color one as the working image; all
    // resampling downstream reads from it.
    let gray = preprocess::to_gray(&image)?;
    let mask = preprocess::binarize(&gray)?;

    let contours = contours::extract(&mask)?;
    info!("Contour count {}", contours.len());

    let mut crops = Vec::new();
    for contour in contours.iter() {
        if contours::accepts(&contour)? {
            crops.push(extract::rect_extract(&contour, &gray, sink)?);
        }
    }
    Ok(crops)
}
