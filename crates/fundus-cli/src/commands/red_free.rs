use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use fundus_core::filters::red_free;
use fundus_core::io::{load_frame, save_frame};

#[derive(Args)]
pub struct RedFreeArgs {
    /// Input image file
    pub file: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "red_free.jpg")]
    pub output: PathBuf,
}

pub fn run(args: &RedFreeArgs) -> Result<()> {
    let frame = load_frame(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    save_frame(&red_free(&frame), &args.output)?;
    println!("Saved red-free view to {}", args.output.display());

    Ok(())
}
