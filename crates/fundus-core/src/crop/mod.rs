pub mod ellipse;

use image::imageops;

use crate::error::{FundusError, Result};
use crate::frame::Frame;

pub use ellipse::{crop_ellipse, ellipse_mask, EllipseSpec};

/// A rectangle in image coordinates for cropping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Check that the rect is non-empty and lies inside the source.
    pub fn validated(&self, src_w: u32, src_h: u32) -> Result<CropRect> {
        if self.width == 0 || self.height == 0 {
            return Err(FundusError::InvalidParameter(
                "Crop width and height must be > 0".into(),
            ));
        }

        if self.x + self.width > src_w || self.y + self.height > src_h {
            return Err(FundusError::InvalidParameter(format!(
                "Crop region ({},{} {}x{}) exceeds source dimensions ({src_w}x{src_h})",
                self.x, self.y, self.width, self.height
            )));
        }

        Ok(*self)
    }
}

/// Copy the pixels inside `rect` into a new frame.
pub fn crop_rect(frame: &Frame, rect: &CropRect) -> Result<Frame> {
    let rect = rect.validated(frame.width(), frame.height())?;
    let cropped = imageops::crop_imm(frame.image(), rect.x, rect.y, rect.width, rect.height);
    Frame::new(cropped.to_image())
}
