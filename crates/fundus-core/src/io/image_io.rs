use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};

use crate::consts::JPEG_QUALITY;
use crate::error::{FundusError, Result};
use crate::frame::Frame;

/// Encoded output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Photographic output. Alpha is dropped.
    Jpeg,
    /// Lossless output that keeps transparency, used for cropped frames.
    Png,
}

impl OutputFormat {
    /// Pick a format from a file extension. Unknown extensions get PNG.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("jpg" | "jpeg") => Self::Jpeg,
            _ => Self::Png,
        }
    }
}

/// Decode an encoded still (JPEG, PNG, ...) into a frame.
pub fn decode_frame(bytes: &[u8]) -> Result<Frame> {
    let img = image::load_from_memory(bytes).map_err(FundusError::Decode)?;
    Frame::from_dynamic(img)
}

/// Load and decode an image file.
pub fn load_frame(path: &Path) -> Result<Frame> {
    let bytes = std::fs::read(path)?;
    decode_frame(&bytes)
}

/// Encode a frame into the given format.
pub fn encode_frame(frame: &Frame, format: OutputFormat) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match format {
        OutputFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(frame.image().clone()).into_rgb8();
            let encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
            rgb.write_with_encoder(encoder).map_err(FundusError::Encode)?;
        }
        OutputFormat::Png => {
            frame
                .image()
                .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
                .map_err(FundusError::Encode)?;
        }
    }
    Ok(buf)
}

/// Save a frame, choosing the format from the file extension.
pub fn save_frame(frame: &Frame, path: &Path) -> Result<()> {
    let bytes = encode_frame(frame, OutputFormat::from_path(path))?;
    std::fs::write(path, bytes)?;
    Ok(())
}
