use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use fundus_core::capture::{capture_burst_with_progress, BurstConfig};
use fundus_core::io::{save_frame, FileSequence};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Args)]
pub struct BurstArgs {
    /// Captured stills, replayed in order as camera grabs
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Grabs per burst (defaults to the number of files)
    #[arg(long)]
    pub count: Option<usize>,

    /// Pause between grabs in milliseconds
    #[arg(long, default_value = "110")]
    pub delay_ms: u64,

    /// Treat files that fail to decode as failed grabs
    #[arg(long)]
    pub skip_undecodable: bool,

    /// Output file path for the sharpest frame
    #[arg(short, long, default_value = "best.jpg")]
    pub output: PathBuf,
}

pub fn run(args: &BurstArgs) -> Result<()> {
    let config = BurstConfig {
        count: args.count.unwrap_or(args.files.len()),
        inter_frame_delay_ms: args.delay_ms,
    };
    let mut source = FileSequence::new(args.files.clone()).skip_undecodable(args.skip_undecodable);

    let pb = ProgressBar::new(config.count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Capturing");

    let result = capture_burst_with_progress(&mut source, &config, |done, _| {
        pb.set_position(done as u64)
    })
    .context("Burst capture failed")?;
    pb.finish_with_message("Captured");

    println!(
        "\n{} of {} grabs usable",
        result.frames.len(),
        result.attempts
    );
    println!("{:>5}  {:>12}", "Frame", "Sharpness");
    println!("{}", "-".repeat(20));
    for (i, scored) in result.frames.iter().enumerate() {
        let marker = if i == result.best_index { "  <- best" } else { "" };
        println!("{:>5}  {:>12.3}{}", i, scored.score.0, marker);
    }

    save_frame(&result.best().frame, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!("\nSaved sharpest frame to {}", args.output.display());

    Ok(())
}
