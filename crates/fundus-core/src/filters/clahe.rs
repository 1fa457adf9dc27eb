use image::RgbaImage;
use ndarray::parallel::prelude::*;
use ndarray::{s, Array2, ArrayView2, ArrayViewMut2, Axis};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::luminance::{luminance_u8, pixel_luminance_u8};
use crate::consts::{DEFAULT_CLIP_LIMIT, DEFAULT_TILE_SIZE, HISTOGRAM_BINS, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{FundusError, Result};
use crate::frame::Frame;

pub type Histogram = [u32; HISTOGRAM_BINS];
pub type Lut = [u8; HISTOGRAM_BINS];

/// Parameters for tile-adaptive contrast enhancement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceParams {
    /// Tile edge length in pixels.
    pub tile_size: u32,
    /// Maximum share of a tile's pixels any one histogram bin may hold, in (0, 1].
    pub clip_limit: f64,
}

impl Default for EnhanceParams {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            clip_limit: DEFAULT_CLIP_LIMIT,
        }
    }
}

impl EnhanceParams {
    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(FundusError::InvalidParameter(
                "Tile size must be > 0".into(),
            ));
        }
        if !self.clip_limit.is_finite() || self.clip_limit <= 0.0 || self.clip_limit > 1.0 {
            return Err(FundusError::InvalidParameter(format!(
                "Clip limit must be in (0, 1], got {}",
                self.clip_limit
            )));
        }
        Ok(())
    }
}

/// Contrast-limited, tile-local histogram equalization of the luminance
/// channel. Color channels are rescaled by the luminance change; alpha is
/// kept as is.
///
/// Tiles are equalized independently and not blended with their
/// neighbours, so tile seams can show on strongly varying images.
pub fn enhance(frame: &Frame, params: &EnhanceParams) -> Result<Frame> {
    params.validate()?;

    let mut luma = luminance_u8(frame.image());
    let tile = params.tile_size as usize;
    let (h, w) = luma.dim();
    debug!(
        tiles_x = w.div_ceil(tile),
        tiles_y = h.div_ceil(tile),
        tile_size = tile,
        clip_limit = params.clip_limit,
        "Equalizing luminance tiles"
    );

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        luma.axis_chunks_iter_mut(Axis(0), tile)
            .into_par_iter()
            .for_each(|band| equalize_band(band, tile, params.clip_limit));
    } else {
        for band in luma.axis_chunks_iter_mut(Axis(0), tile) {
            equalize_band(band, tile, params.clip_limit);
        }
    }

    Ok(Frame::derived(recombine(frame.image(), &luma)))
}

/// Equalize every tile of one horizontal band of the luminance plane.
fn equalize_band(mut band: ArrayViewMut2<u8>, tile: usize, clip_limit: f64) {
    let w = band.ncols();
    for x0 in (0..w).step_by(tile) {
        let x1 = (x0 + tile).min(w);
        let mut view = band.slice_mut(s![.., x0..x1]);
        let hist = tile_histogram(view.view());
        let lut = equalization_lut(&hist, view.len() as u32, clip_limit);
        view.mapv_inplace(|v| lut[v as usize]);
    }
}

/// 256-bin histogram of a luminance tile.
pub fn tile_histogram(tile: ArrayView2<u8>) -> Histogram {
    let mut hist = [0u32; HISTOGRAM_BINS];
    for &v in tile.iter() {
        hist[v as usize] += 1;
    }
    hist
}

/// Clip every bin to `max(1, floor(clip_limit * pixel_count))` and spread the
/// clipped mass evenly over all bins. The remainder of the division by the
/// bin count is dropped.
pub fn clip_and_redistribute(hist: &mut Histogram, pixel_count: u32, clip_limit: f64) {
    let max_clip = ((clip_limit * pixel_count as f64).floor() as u32).max(1);

    let mut excess = 0u32;
    for bin in hist.iter_mut() {
        if *bin > max_clip {
            excess += *bin - max_clip;
            *bin = max_clip;
        }
    }

    let add = excess / HISTOGRAM_BINS as u32;
    if add > 0 {
        for bin in hist.iter_mut() {
            *bin += add;
        }
    }
}

/// Lookup table from the clipped histogram's cumulative distribution,
/// scaled to 0..=255.
pub fn equalization_lut(hist: &Histogram, pixel_count: u32, clip_limit: f64) -> Lut {
    let mut clipped = *hist;
    clip_and_redistribute(&mut clipped, pixel_count, clip_limit);

    let mut lut = [0u8; HISTOGRAM_BINS];
    let mut cdf = 0u64;
    for (entry, &count) in lut.iter_mut().zip(clipped.iter()) {
        cdf += count as u64;
        let level = (cdf as f64 / pixel_count as f64 * 255.0).round();
        *entry = level.clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Scale each pixel's RGB by `new_luma / old_luma`. A pixel keeps its color
/// when either level is 0.
fn recombine(source: &RgbaImage, luma: &Array2<u8>) -> RgbaImage {
    let mut out = source.clone();
    let new_levels = luma
        .as_slice()
        .expect("luminance plane is contiguous");

    let rescale = |(px, &new_l): (&mut [u8], &u8)| {
        let old_l = pixel_luminance_u8(px);
        let scale = if old_l > 0 && new_l > 0 {
            new_l as f32 / old_l as f32
        } else {
            1.0
        };
        for c in px.iter_mut().take(3) {
            *c = (*c as f32 * scale).round().clamp(0.0, 255.0) as u8;
        }
    };

    if new_levels.len() >= PARALLEL_PIXEL_THRESHOLD {
        out.par_chunks_exact_mut(4)
            .zip(new_levels.par_iter())
            .for_each(rescale);
    } else {
        out.chunks_exact_mut(4).zip(new_levels.iter()).for_each(rescale);
    }
    out
}
