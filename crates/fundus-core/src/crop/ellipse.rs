use image::{GrayImage, Luma};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::DEFAULT_ELLIPSE_RADIUS_FRACTION;
use crate::error::{FundusError, Result};
use crate::frame::Frame;

use super::{crop_rect, CropRect};

/// Mask value inside the ellipse.
const INSIDE: u8 = 255;

/// An ellipse in pixel coordinates: center, radii and rotation in radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EllipseSpec {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
    #[serde(default)]
    pub rotation: f64,
}

impl EllipseSpec {
    /// The ellipse an operator starts from on a fresh capture: centered,
    /// radii at 35% of each dimension, no rotation.
    pub fn centered(width: u32, height: u32) -> Self {
        Self {
            cx: (width / 2) as f64,
            cy: (height / 2) as f64,
            rx: (width as f64 * DEFAULT_ELLIPSE_RADIUS_FRACTION).floor(),
            ry: (height as f64 * DEFAULT_ELLIPSE_RADIUS_FRACTION).floor(),
            rotation: 0.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [self.cx, self.cy, self.rx, self.ry, self.rotation];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(FundusError::InvalidParameter(format!(
                "Ellipse parameters must be finite: {self:?}"
            )));
        }
        if self.rx <= 0.0 || self.ry <= 0.0 {
            return Err(FundusError::InvalidParameter(format!(
                "Ellipse radii must be > 0, got rx={} ry={}",
                self.rx, self.ry
            )));
        }
        Ok(())
    }

    /// Whether the point `(x, y)` lies inside or on the ellipse.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (sin, cos) = self.rotation.sin_cos();
        let dx = x - self.cx;
        let dy = y - self.cy;
        // Undo the rotation, then test against the unit circle.
        let u = (dx * cos + dy * sin) / self.rx;
        let v = (-dx * sin + dy * cos) / self.ry;
        u * u + v * v <= 1.0
    }

    /// Axis-aligned box of the unrotated radii, clamped to the frame.
    pub fn bounding_box(&self, width: u32, height: u32) -> Result<CropRect> {
        self.validate()?;

        let left = (self.cx - self.rx).floor().max(0.0);
        let top = (self.cy - self.ry).floor().max(0.0);
        if left >= width as f64 || top >= height as f64 {
            return Err(FundusError::InvalidParameter(format!(
                "Ellipse at ({}, {}) lies outside the {width}x{height} frame",
                self.cx, self.cy
            )));
        }
        let left = left as u32;
        let top = top as u32;
        let box_w = (self.rx * 2.0).ceil().min((width - left) as f64) as u32;
        let box_h = (self.ry * 2.0).ceil().min((height - top) as f64) as u32;

        CropRect {
            x: left,
            y: top,
            width: box_w,
            height: box_h,
        }
        .validated(width, height)
    }
}

/// Same-size mask: 0 outside the ellipse, 255 where the pixel center is inside.
pub fn ellipse_mask(width: u32, height: u32, spec: &EllipseSpec) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        if spec.contains(x as f64 + 0.5, y as f64 + 0.5) {
            Luma([INSIDE])
        } else {
            Luma([0])
        }
    })
}

/// Make everything outside the ellipse transparent and trim to its
/// bounding box. Pixels inside the box but outside the ellipse are kept
/// with zero alpha.
pub fn crop_ellipse(frame: &Frame, spec: &EllipseSpec) -> Result<Frame> {
    let rect = spec.bounding_box(frame.width(), frame.height())?;
    debug!(?spec, ?rect, "Ellipse crop");

    let mask = ellipse_mask(frame.width(), frame.height(), spec);
    let mut masked = frame.image().clone();
    for (px, m) in masked.pixels_mut().zip(mask.pixels()) {
        let alpha = px.0[3] as u32 * m.0[0] as u32;
        px.0[3] = ((alpha + 127) / 255) as u8;
    }

    crop_rect(&Frame::derived(masked), &rect)
}
