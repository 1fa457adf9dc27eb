use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use fundus_core::io::load_frame;
use fundus_core::quality::laplacian::{sharpness, working_size};

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let frame = load_frame(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let (sw, sh) = working_size(frame.width(), frame.height());
    let translucent = frame.as_raw().chunks_exact(4).any(|p| p[3] < 255);

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", frame.width(), frame.height());
    println!("Alpha:       {}", if translucent { "yes" } else { "opaque" });
    println!("Sharpness:   {} (scored at {}x{})", sharpness(&frame), sw, sh);

    Ok(())
}
