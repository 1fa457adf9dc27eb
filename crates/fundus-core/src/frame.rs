use image::{DynamicImage, Rgba, RgbaImage};

use crate::error::{FundusError, Result};

/// A single decoded still image.
/// Pixels are 8-bit RGBA, row-major, in one contiguous buffer.
///
/// Frames are never mutated once built; every transform returns a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    image: RgbaImage,
}

impl Frame {
    /// Wrap an RGBA image. Zero-sized images are rejected.
    pub fn new(image: RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(FundusError::InvalidDimensions { width, height });
        }
        Ok(Self { image })
    }

    /// Wrap an image derived pixel-for-pixel from an existing frame, so its
    /// dimensions are already known to be non-zero.
    pub(crate) fn derived(image: RgbaImage) -> Self {
        debug_assert!(image.width() > 0 && image.height() > 0);
        Self { image }
    }

    /// Build a frame from a raw RGBA buffer of `width * height * 4` bytes.
    pub fn from_raw(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let image = RgbaImage::from_raw(width, height, rgba)
            .ok_or(FundusError::InvalidDimensions { width, height })?;
        Self::new(image)
    }

    /// Convert any decoded image to RGBA. Sources without alpha become opaque.
    pub fn from_dynamic(image: DynamicImage) -> Result<Self> {
        Self::new(image.into_rgba8())
    }

    /// A frame filled with a single color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self> {
        Self::new(RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Focus quality of one frame. Higher means sharper.
///
/// Only meaningful for the frame it was computed from.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct SharpnessScore(pub f64);

impl SharpnessScore {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for SharpnessScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// A captured frame together with its sharpness score.
#[derive(Clone, Debug)]
pub struct ScoredFrame {
    pub frame: Frame,
    pub score: SharpnessScore,
}

/// Which eye a capture belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Eye {
    /// Oculus dexter, the right eye.
    #[default]
    OD,
    /// Oculus sinister, the left eye.
    OS,
}

impl std::fmt::Display for Eye {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OD => write!(f, "OD"),
            Self::OS => write!(f, "OS"),
        }
    }
}
