use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use fundus_core::crop::{crop_ellipse, EllipseSpec};
use fundus_core::io::{load_frame, save_frame};

#[derive(Args)]
pub struct CropArgs {
    /// Input image file
    pub file: PathBuf,

    /// Ellipse center x in pixels (default: image center)
    #[arg(long, allow_negative_numbers = true)]
    pub cx: Option<f64>,

    /// Ellipse center y in pixels (default: image center)
    #[arg(long, allow_negative_numbers = true)]
    pub cy: Option<f64>,

    /// Horizontal radius in pixels (default: 35% of the width)
    #[arg(long)]
    pub rx: Option<f64>,

    /// Vertical radius in pixels (default: 35% of the height)
    #[arg(long)]
    pub ry: Option<f64>,

    /// Rotation in radians
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    pub rotation: f64,

    /// Output file path (PNG keeps the transparent surround)
    #[arg(short, long, default_value = "cropped.png")]
    pub output: PathBuf,
}

impl CropArgs {
    /// Operator-given geometry, falling back to the centered default.
    pub fn spec_for(&self, width: u32, height: u32) -> EllipseSpec {
        let default = EllipseSpec::centered(width, height);
        EllipseSpec {
            cx: self.cx.unwrap_or(default.cx),
            cy: self.cy.unwrap_or(default.cy),
            rx: self.rx.unwrap_or(default.rx),
            ry: self.ry.unwrap_or(default.ry),
            rotation: self.rotation,
        }
    }
}

pub fn run(args: &CropArgs) -> Result<()> {
    let frame = load_frame(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let spec = args.spec_for(frame.width(), frame.height());
    println!(
        "Cropping to ellipse center=({}, {}) radii=({}, {}) rotation={}",
        spec.cx, spec.cy, spec.rx, spec.ry, spec.rotation
    );
    let cropped = crop_ellipse(&frame, &spec)?;

    save_frame(&cropped, &args.output)?;
    println!(
        "Saved {}x{} crop to {}",
        cropped.width(),
        cropped.height(),
        args.output.display()
    );

    Ok(())
}
