use log::info;
use opencv::{
    core::{Mat, Point2f, RotatedRect, Scalar, Size},
    imgproc::{self, BORDER_CONSTANT, INTER_CUBIC},
    prelude::*,
    types::VectorOfPoint,
};

use crate::display::DisplaySink;
use crate::error::Result;

/// Rotate a fitted rectangle into landscape orientation. The stored size
/// must describe the rectangle as it lies after rotation, so a rectangle
/// fitted taller than wide gets its angle advanced by 90 degrees and its
/// dimensions swapped. Returns whether the correction fired.
pub fn normalize(rect: &mut RotatedRect) -> bool {
    if rect.size.width < rect.size.height {
        rect.angle += 90.0;
        std::mem::swap(&mut rect.size.width, &mut rect.size.height);
        true
    } else {
        false
    }
}

/// Canvas dimensions for the rotated image: swapped relative to the source
/// when the 90 degree correction reoriented the bounding frame, the source
/// dimensions otherwise. Angles far from 0 or 90 can still clip at the
/// corners.
pub fn canvas_size(source: Size, swapped: bool) -> Size {
    if swapped {
        Size::new(source.height, source.width)
    } else {
        source
    }
}

/// Offsets that land the rectangle center on the canvas center. Center
/// coordinates truncate toward zero.
pub fn center_offset(canvas: Size, center: Point2f) -> (i32, i32) {
    (
        canvas.width / 2 - center.x as i32,
        canvas.height / 2 - center.y as i32,
    )
}

/// Fit the minimum-area rectangle around `contour`, rotate `source` so that
/// rectangle lies axis-aligned, and crop its footprint at sub-pixel
/// precision. Both the rotated canvas and the crop are pushed to `sink`;
/// the crop is returned.
pub fn rect_extract(
    contour: &VectorOfPoint,
    source: &Mat,
    sink: &mut dyn DisplaySink,
) -> Result<Mat> {
    let mut rect = imgproc::min_area_rect(contour)?;
    info!("Angle {}", rect.angle);
    let swapped = normalize(&mut rect);
    let canvas = canvas_size(source.size()?, swapped);
    let (offset_x, offset_y) = center_offset(canvas, rect.center);

    // A single resampling pass performs both the rotation about the original
    // center and the recentering into the canvas; the rect's center has to
    // move with the content since the crop below is taken in canvas
    // coordinates.
    let mut rotation = imgproc::get_rotation_matrix_2d(rect.center, f64::from(rect.angle), 1.0)?;
    *rotation.at_2d_mut::<f64>(0, 2)? += f64::from(offset_x);
    *rotation.at_2d_mut::<f64>(1, 2)? += f64::from(offset_y);
    rect.center.x += offset_x as f32;
    rect.center.y += offset_y as f32;

    let mut rotated = Mat::default();
    imgproc::warp_affine(
        source,
        &mut rotated,
        &rotation,
        canvas,
        INTER_CUBIC,
        BORDER_CONSTANT,
        Scalar::all(255.0),
    )?;
    sink.show("Rotated", &rotated)?;

    let patch = Size::new(
        rect.size.width.round() as i32,
        rect.size.height.round() as i32,
    );
    let mut cropped = Mat::default();
    imgproc::get_rect_sub_pix(&rotated, patch, rect.center, &mut cropped, -1)?;
    sink.show("Cropped", &cropped)?;
    Ok(cropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::Size2f;
    use proptest::prelude::*;

    fn rect(width: f32, height: f32, angle: f32) -> RotatedRect {
        RotatedRect {
            center: Point2f::new(50.0, 50.0),
            size: Size2f::new(width, height),
            angle,
        }
    }

    #[test]
    fn tall_rectangle_is_swapped_and_turned() {
        let mut r = rect(100.0, 200.0, 10.0);
        assert!(normalize(&mut r));
        assert_eq!(r.size.width, 200.0);
        assert_eq!(r.size.height, 100.0);
        assert_eq!(r.angle, 100.0);
    }

    #[test]
    fn wide_rectangle_is_left_alone() {
        let mut r = rect(200.0, 100.0, 10.0);
        assert!(!normalize(&mut r));
        assert_eq!(r.size.width, 200.0);
        assert_eq!(r.size.height, 100.0);
        assert_eq!(r.angle, 10.0);
    }

    #[test]
    fn square_rectangle_is_left_alone() {
        let mut r = rect(150.0, 150.0, 45.0);
        assert!(!normalize(&mut r));
        assert_eq!(r.angle, 45.0);
    }

    #[test]
    fn canvas_swaps_dimensions_only_on_correction() {
        let source = Size::new(640, 480);
        assert_eq!(canvas_size(source, true), Size::new(480, 640));
        assert_eq!(canvas_size(source, false), source);
    }

    #[test]
    fn offsets_truncate_the_center() {
        let (dx, dy) = center_offset(Size::new(200, 100), Point2f::new(60.7, 30.9));
        assert_eq!((dx, dy), (40, 20));
    }

    #[test]
    fn recentered_center_lands_within_a_pixel_of_the_canvas_center() {
        let canvas = Size::new(801, 601);
        let center = Point2f::new(123.4, 456.7);
        let (dx, dy) = center_offset(canvas, center);
        let moved_x = center.x + dx as f32;
        let moved_y = center.y + dy as f32;
        assert!((moved_x - (canvas.width / 2) as f32).abs() < 1.0);
        assert!((moved_y - (canvas.height / 2) as f32).abs() < 1.0);
    }

    proptest! {
        #[test]
        fn normalization_always_lands_landscape(
            width in 1.0f32..2000.0,
            height in 1.0f32..2000.0,
            angle in -90.0f32..90.0,
        ) {
            let mut r = rect(width, height, angle);
            let swapped = normalize(&mut r);
            prop_assert!(r.size.width >= r.size.height);
            prop_assert_eq!(swapped, width < height);
            if swapped {
                prop_assert_eq!(r.angle, angle + 90.0);
                prop_assert_eq!((r.size.width, r.size.height), (height, width));
            } else {
                prop_assert_eq!(r.angle, angle);
                prop_assert_eq!((r.size.width, r.size.height), (width, height));
            }
        }
    }
}
