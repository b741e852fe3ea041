use std::path::PathBuf;

use opencv::{
    core::{Mat, Vector},
    imgcodecs,
    prelude::*,
};

use crate::error::{Error, Result};

const LEFT_SAMPLE: &[u8] = include_bytes!("../sample/left.png");
const RIGHT_SAMPLE: &[u8] = include_bytes!("../sample/right.png");

/// Demo images compiled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Left,
    Right,
}

impl Sample {
    fn bytes(self) -> &'static [u8] {
        match self {
            Sample::Left => LEFT_SAMPLE,
            Sample::Right => RIGHT_SAMPLE,
        }
    }
}

/// Where the pipeline reads its image from.
#[derive(Debug, Clone)]
pub enum InputSource {
    Path(PathBuf),
    Bundled(Sample),
}

impl InputSource {
    /// Decode the source into a 3-channel BGR matrix. An unreadable path or
    /// a sample the codec rejects is fatal.
    pub fn load(&self) -> Result<Mat> {
        let image = match self {
            InputSource::Path(path) => {
                let path_str = path
                    .to_str()
                    .ok_or_else(|| Error::ImageRead { path: path.clone() })?;
                imgcodecs::imread(path_str, imgcodecs::IMREAD_COLOR)?
            }
            InputSource::Bundled(sample) => {
                let buf = Vector::<u8>::from_slice(sample.bytes());
                imgcodecs::imdecode(&buf, imgcodecs::IMREAD_COLOR)?
            }
        };
        if image.empty() {
            return Err(match self {
                InputSource::Path(path) => Error::ImageRead { path: path.clone() },
                InputSource::Bundled(sample) => Error::SampleDecode(*sample),
            });
        }
        Ok(image)
    }
}
