mod common;

use std::f64::consts::FRAC_PI_2;

use image::{Rgba, RgbaImage};

use fundus_core::crop::{crop_ellipse, crop_rect, ellipse_mask, CropRect, EllipseSpec};
use fundus_core::error::FundusError;
use fundus_core::frame::Frame;

use common::gray_frame;

fn spec(cx: f64, cy: f64, rx: f64, ry: f64, rotation: f64) -> EllipseSpec {
    EllipseSpec {
        cx,
        cy,
        rx,
        ry,
        rotation,
    }
}

fn coordinate_frame(w: u32, h: u32) -> Frame {
    let image = RgbaImage::from_fn(w, h, |x, y| Rgba([x as u8, y as u8, 7, 255]));
    Frame::new(image).unwrap()
}

#[test]
fn test_crop_dimensions_and_opacity() {
    let src = gray_frame(100, 100, 180);
    let out = crop_ellipse(&src, &spec(50.0, 50.0, 30.0, 20.0, 0.0)).unwrap();

    let (left, top) = (20u32, 30u32);
    assert_eq!(out.width(), (100 - left).min(60));
    assert_eq!(out.height(), (100 - top).min(40));

    // Ellipse center in output coordinates.
    assert_eq!(out.pixel(30, 20), [180, 180, 180, 255]);

    for (x, y) in [(0, 0), (59, 0), (0, 39), (59, 39)] {
        assert_eq!(out.pixel(x, y)[3], 0, "corner ({x}, {y}) should be transparent");
    }
}

#[test]
fn test_crop_keeps_color_under_transparent_pixels() {
    let src = coordinate_frame(100, 100);
    let out = crop_ellipse(&src, &spec(50.0, 50.0, 30.0, 20.0, 0.0)).unwrap();

    // Output (x, y) maps to source (x + 20, y + 30).
    assert_eq!(out.pixel(30, 20), [50, 50, 7, 255]);
    assert_eq!(out.pixel(0, 0), [20, 30, 7, 0]);
}

#[test]
fn test_crop_does_not_mutate_source() {
    let src = gray_frame(64, 64, 99);
    let before = src.clone();
    crop_ellipse(&src, &spec(32.0, 32.0, 10.0, 10.0, 0.0)).unwrap();
    assert_eq!(src, before);
}

#[test]
fn test_existing_alpha_is_multiplied() {
    let src = Frame::filled(40, 40, [10, 20, 30, 128]).unwrap();
    let out = crop_ellipse(&src, &spec(20.0, 20.0, 10.0, 10.0, 0.0)).unwrap();
    assert_eq!(out.pixel(10, 10)[3], 128);
    assert_eq!(out.pixel(0, 0)[3], 0);
}

#[test]
fn test_bounding_box_clamped_to_frame() {
    let rect = spec(10.0, 10.0, 30.0, 20.0, 0.0)
        .bounding_box(100, 100)
        .unwrap();
    assert_eq!(
        rect,
        CropRect {
            x: 0,
            y: 0,
            width: 60,
            height: 40
        }
    );

    let rect = spec(90.0, 95.0, 30.0, 20.0, 0.0)
        .bounding_box(100, 100)
        .unwrap();
    assert_eq!(
        rect,
        CropRect {
            x: 60,
            y: 75,
            width: 40,
            height: 25
        }
    );
}

#[test]
fn test_fractional_geometry_rounds_outward() {
    let rect = spec(50.5, 40.25, 10.2, 5.5, 0.0)
        .bounding_box(200, 200)
        .unwrap();
    assert_eq!(rect.x, 40);
    assert_eq!(rect.y, 34);
    assert_eq!(rect.width, 21);
    assert_eq!(rect.height, 11);
}

#[test]
fn test_rotation_turns_the_long_axis() {
    let s = spec(50.0, 50.0, 30.0, 10.0, FRAC_PI_2);
    let mask = ellipse_mask(100, 100, &s);

    assert_eq!(mask.get_pixel(50, 75).0[0], 255);
    assert_eq!(mask.get_pixel(75, 50).0[0], 0);

    let unrotated = ellipse_mask(100, 100, &spec(50.0, 50.0, 30.0, 10.0, 0.0));
    assert_eq!(unrotated.get_pixel(75, 50).0[0], 255);
    assert_eq!(unrotated.get_pixel(50, 75).0[0], 0);
}

#[test]
fn test_mask_is_binary() {
    let mask = ellipse_mask(64, 48, &spec(30.0, 20.0, 12.0, 9.0, 0.7));
    assert!(mask.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    assert!(mask.pixels().any(|p| p.0[0] == 255));
}

#[test]
fn test_degenerate_radii_rejected() {
    let src = gray_frame(100, 100, 1);
    for s in [
        spec(50.0, 50.0, 0.0, 20.0, 0.0),
        spec(50.0, 50.0, 30.0, 0.0, 0.0),
        spec(50.0, 50.0, -5.0, 20.0, 0.0),
        spec(50.0, 50.0, 30.0, -1.0, 0.0),
        spec(f64::NAN, 50.0, 30.0, 20.0, 0.0),
    ] {
        let err = crop_ellipse(&src, &s).unwrap_err();
        assert!(matches!(err, FundusError::InvalidParameter(_)), "{s:?}");
    }
}

#[test]
fn test_ellipse_outside_frame_rejected() {
    let src = gray_frame(100, 100, 1);
    let err = crop_ellipse(&src, &spec(500.0, 50.0, 30.0, 20.0, 0.0)).unwrap_err();
    assert!(matches!(err, FundusError::InvalidParameter(_)));
}

#[test]
fn test_centered_default_ellipse() {
    let s = EllipseSpec::centered(640, 480);
    assert_eq!(s, spec(320.0, 240.0, 224.0, 168.0, 0.0));

    let s = EllipseSpec::centered(101, 51);
    assert_eq!((s.cx, s.cy, s.rx, s.ry), (50.0, 25.0, 35.0, 17.0));
}

#[test]
fn test_crop_rect_bounds_checked() {
    let src = coordinate_frame(10, 10);
    let out = crop_rect(
        &src,
        &CropRect {
            x: 2,
            y: 3,
            width: 4,
            height: 5,
        },
    )
    .unwrap();
    assert_eq!((out.width(), out.height()), (4, 5));
    assert_eq!(out.pixel(0, 0), [2, 3, 7, 255]);

    let err = crop_rect(
        &src,
        &CropRect {
            x: 8,
            y: 0,
            width: 4,
            height: 2,
        },
    )
    .unwrap_err();
    assert!(matches!(err, FundusError::InvalidParameter(_)));
}
