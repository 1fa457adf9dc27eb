use image::imageops::{self, FilterType};
use ndarray::Array2;
use rayon::prelude::*;

use crate::color::luminance::luminance_f32;
use crate::consts::SHARPNESS_WORKING_WIDTH;
use crate::frame::{Frame, SharpnessScore};

/// Focus quality of a frame as the variance of its Laplacian response.
///
/// The frame is first resized to [`SHARPNESS_WORKING_WIDTH`] (aspect kept),
/// converted to luminance, then convolved with
///   0  1  0
///   1 -4  1
///   0  1  0
/// over interior pixels. Higher means sharper.
pub fn sharpness(frame: &Frame) -> SharpnessScore {
    let (w, h) = working_size(frame.width(), frame.height());
    let luma = if (w, h) == (frame.width(), frame.height()) {
        luminance_f32(frame.image())
    } else {
        luminance_f32(&imageops::resize(frame.image(), w, h, FilterType::Triangle))
    };
    SharpnessScore(laplacian_variance_array(&luma))
}

/// Working dimensions used for scoring: fixed width, height by aspect ratio.
pub fn working_size(width: u32, height: u32) -> (u32, u32) {
    let w = SHARPNESS_WORKING_WIDTH;
    let h = ((height as f64 / width.max(1) as f64) * w as f64).round().max(1.0) as u32;
    (w, h)
}

/// Population variance of the Laplacian over the interior of a plane.
/// Planes narrower or shorter than 3 pixels have no interior and score 0.
pub fn laplacian_variance_array(data: &Array2<f32>) -> f64 {
    let (h, w) = data.dim();
    if h < 3 || w < 3 {
        return 0.0;
    }

    let mut sum = 0.0f64;
    let mut sum_sq = 0.0f64;
    let count = ((h - 2) * (w - 2)) as f64;

    for row in 1..h - 1 {
        for col in 1..w - 1 {
            let lap = -4.0 * data[[row, col]] as f64
                + data[[row - 1, col]] as f64
                + data[[row + 1, col]] as f64
                + data[[row, col - 1]] as f64
                + data[[row, col + 1]] as f64;
            sum += lap;
            sum_sq += lap * lap;
        }
    }

    let mean = sum / count;
    (sum_sq / count - mean * mean).max(0.0)
}

/// Score all frames and return `(index, score)` sorted sharpest first.
///
/// The sort is stable, so equal scores keep their capture order.
pub fn rank_frames(frames: &[Frame]) -> Vec<(usize, SharpnessScore)> {
    let mut scores: Vec<(usize, SharpnessScore)> = frames
        .par_iter()
        .enumerate()
        .map(|(i, f)| (i, sharpness(f)))
        .collect();

    scores.sort_by(|a, b| b.1 .0.total_cmp(&a.1 .0));
    scores
}
