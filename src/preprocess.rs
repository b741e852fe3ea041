use opencv::{
    core::Mat,
    imgproc::{self, COLOR_BGR2GRAY, THRESH_BINARY},
    prelude::*,
};

use crate::error::Result;

// Fixed binarization constants, not configurable.
const THRESHOLD: f64 = 150.0;
const THRESHOLD_MAX: f64 = 255.0;

/// Collapse a BGR image to single-channel grayscale.
pub fn to_gray(image: &Mat) -> Result<Mat> {
    let mut gray = Mat::default();
    imgproc::cvt_color(image, &mut gray, COLOR_BGR2GRAY, 0)?;
    Ok(gray)
}

/// Split a grayscale image into a {0, 255} mask at the fixed threshold.
pub fn binarize(gray: &Mat) -> Result<Mat> {
    let mut mask = Mat::default();
    imgproc::threshold(gray, &mut mask, THRESHOLD, THRESHOLD_MAX, THRESH_BINARY)?;
    Ok(mask)
}
