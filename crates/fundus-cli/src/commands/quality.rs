use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use fundus_core::io::load_frame;
use fundus_core::quality::rank_frames;
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Args)]
pub struct QualityArgs {
    /// Input image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Show top N images only
    #[arg(long, default_value = "20")]
    pub top: usize,
}

pub fn run(args: &QualityArgs) -> Result<()> {
    let total = args.files.len();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Reading images");

    let frames = args
        .files
        .iter()
        .map(|path| {
            pb.inc(1);
            load_frame(path).with_context(|| format!("Failed to load {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("Scoring images");
    let ranked = rank_frames(&frames);

    println!(
        "\nTop {} images by sharpness (of {}):",
        args.top.min(total),
        total
    );
    println!("{:>5}  {:>12}  {}", "Rank", "Score", "File");
    println!("{}", "-".repeat(40));

    for (rank, (idx, score)) in ranked.iter().take(args.top).enumerate() {
        println!(
            "{:>5}  {:>12.3}  {}",
            rank + 1,
            score.0,
            args.files[*idx].display()
        );
    }

    if let (Some(best), Some(worst)) = (ranked.first(), ranked.last()) {
        println!("\nBest score:  {:.3}", best.1 .0);
        println!("Worst score: {:.3}", worst.1 .0);
    }

    Ok(())
}
