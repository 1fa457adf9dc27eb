use image::RgbaImage;
use ndarray::Array2;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};

/// Weighted luminance of one RGB triple (alpha ignored).
#[inline]
pub fn pixel_luminance(rgba: &[u8]) -> f32 {
    LUMINANCE_R * rgba[0] as f32 + LUMINANCE_G * rgba[1] as f32 + LUMINANCE_B * rgba[2] as f32
}

/// Luminance rounded to the nearest 8-bit level.
#[inline]
pub fn pixel_luminance_u8(rgba: &[u8]) -> u8 {
    pixel_luminance(rgba).round().clamp(0.0, 255.0) as u8
}

/// Full-precision luminance plane, shape = (height, width).
pub fn luminance_f32(image: &RgbaImage) -> Array2<f32> {
    let (w, h) = (image.width() as usize, image.height() as usize);
    let values: Vec<f32> = image.as_raw().chunks_exact(4).map(pixel_luminance).collect();
    Array2::from_shape_vec((h, w), values).expect("one luminance value per pixel")
}

/// Rounded 8-bit luminance plane, shape = (height, width).
pub fn luminance_u8(image: &RgbaImage) -> Array2<u8> {
    let (w, h) = (image.width() as usize, image.height() as usize);
    let values: Vec<u8> = image
        .as_raw()
        .chunks_exact(4)
        .map(pixel_luminance_u8)
        .collect();
    Array2::from_shape_vec((h, w), values).expect("one luminance value per pixel")
}
