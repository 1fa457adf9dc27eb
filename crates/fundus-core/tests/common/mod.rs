#![allow(dead_code)]

use image::{imageops, Rgba, RgbaImage};

use fundus_core::frame::Frame;

/// Opaque frame filled with one gray level.
pub fn gray_frame(width: u32, height: u32, level: u8) -> Frame {
    Frame::filled(width, height, [level, level, level, 255]).expect("valid dimensions")
}

/// Left half black, right half white, with a hard vertical edge.
pub fn edge_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    })
}

pub fn edge_frame(width: u32, height: u32) -> Frame {
    Frame::new(edge_image(width, height)).expect("valid dimensions")
}

/// The hard edge frame after a Gaussian blur.
pub fn blurred_edge_frame(width: u32, height: u32, sigma: f32) -> Frame {
    Frame::new(imageops::blur(&edge_image(width, height), sigma)).expect("valid dimensions")
}

/// Checkerboard alternating between 0 and `amplitude`. Sharpness grows with
/// the amplitude.
pub fn checker_frame(width: u32, height: u32, amplitude: u8) -> Frame {
    let image = RgbaImage::from_fn(width, height, |x, y| {
        let v = if (x + y) % 2 == 0 { amplitude } else { 0 };
        Rgba([v, v, v, 255])
    });
    Frame::new(image).expect("valid dimensions")
}
