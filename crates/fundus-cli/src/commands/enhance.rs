use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use fundus_core::consts::{DEFAULT_CLIP_LIMIT, DEFAULT_TILE_SIZE};
use fundus_core::filters::{enhance, EnhanceParams};
use fundus_core::io::{load_frame, save_frame};

#[derive(Args)]
pub struct EnhanceArgs {
    /// Input image file
    pub file: PathBuf,

    /// Tile edge length in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Histogram clip limit as a fraction of tile pixels, in (0, 1]
    #[arg(long, default_value_t = DEFAULT_CLIP_LIMIT)]
    pub clip_limit: f64,

    /// Output file path
    #[arg(short, long, default_value = "enhanced.jpg")]
    pub output: PathBuf,
}

pub fn run(args: &EnhanceArgs) -> Result<()> {
    let frame = load_frame(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    println!("Loaded {}x{} image", frame.width(), frame.height());

    let params = EnhanceParams {
        tile_size: args.tile_size,
        clip_limit: args.clip_limit,
    };
    println!(
        "Applying contrast enhancement: tile={}, clip={}",
        params.tile_size, params.clip_limit
    );
    let enhanced = enhance(&frame, &params)?;

    save_frame(&enhanced, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
