use opencv::{
    core::{Mat, Point},
    imgproc::{self, CHAIN_APPROX_NONE, RETR_TREE},
    prelude::*,
    types::{VectorOfPoint, VectorOfVectorOfPoint},
};

use crate::error::Result;

// Acceptance band for contour areas, strict on both ends. Rejects noise
// specks and the whole-frame background contour.
const MIN_AREA: f64 = 1024.0;
const MAX_AREA: f64 = 1_048_576.0;

/// Full-tree contour retrieval over a binary mask with every boundary point
/// retained. The hierarchy is computed as part of the retrieval mode but not
/// consumed downstream.
pub fn extract(mask: &Mat) -> Result<VectorOfVectorOfPoint> {
    let mut contours = VectorOfVectorOfPoint::new();
    let mut hierarchy = Mat::default();
    imgproc::find_contours_with_hierarchy(
        mask,
        &mut contours,
        &mut hierarchy,
        RETR_TREE,
        CHAIN_APPROX_NONE,
        Point::new(0, 0),
    )?;
    Ok(contours)
}

/// Whether a contour's enclosed area falls inside the acceptance band.
pub fn accepts(contour: &VectorOfPoint) -> Result<bool> {
    let area = imgproc::contour_area(contour, false)?;
    Ok(area > MIN_AREA && area < MAX_AREA)
}
