use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use fundus_core::capture::BurstConfig;
use fundus_core::consts::DEFAULT_INTER_FRAME_DELAY_MS;
use fundus_core::crop::EllipseSpec;
use fundus_core::filters::EnhanceParams;
use fundus_core::frame::Eye;
use fundus_core::io::{load_frame, save_frame, FileSequence};
use fundus_core::pipeline::config::PipelineConfig;
use fundus_core::pipeline::run_pipeline_reported;

use crate::progress::BarReporter;
use crate::summary::{print_pipeline_summary, print_scores};

#[derive(Clone, Copy, ValueEnum)]
pub enum EyeArg {
    Od,
    Os,
}

impl From<EyeArg> for Eye {
    fn from(arg: EyeArg) -> Self {
        match arg {
            EyeArg::Od => Eye::OD,
            EyeArg::Os => Eye::OS,
        }
    }
}

#[derive(Args)]
pub struct RunArgs {
    /// Captured stills, replayed in order as camera grabs
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Pipeline config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Which eye the capture belongs to
    #[arg(long, value_enum, default_value = "od")]
    pub eye: EyeArg,

    /// Grabs per burst (defaults to the number of files)
    #[arg(long)]
    pub count: Option<usize>,

    /// Pause between grabs in milliseconds
    #[arg(long, default_value_t = DEFAULT_INTER_FRAME_DELAY_MS)]
    pub delay_ms: u64,

    /// Crop to the default centered ellipse
    #[arg(long)]
    pub crop: bool,

    /// Apply contrast enhancement with default parameters
    #[arg(long)]
    pub enhance: bool,

    /// Convert the result to a red-free view
    #[arg(long)]
    pub red_free: bool,

    /// Treat files that fail to decode as failed grabs
    #[arg(long)]
    pub skip_undecodable: bool,

    /// Output file path (default: <EYE>.jpg, or <EYE>.png when cropping)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid pipeline config")?
    } else {
        build_config_from_args(args)?
    };

    let eye = Eye::from(args.eye);
    let output = args.output.clone().unwrap_or_else(|| {
        let ext = if config.crop.is_some() { "png" } else { "jpg" };
        PathBuf::from(format!("{eye}.{ext}"))
    });

    print_pipeline_summary(&config, eye, &output);

    let mut source = FileSequence::new(args.files.clone()).skip_undecodable(args.skip_undecodable);
    let reporter = BarReporter::new()?;
    let result = run_pipeline_reported(&mut source, &config, &reporter);
    reporter.finish();
    let result = result.context("Pipeline failed")?;

    print_scores(&result.burst);

    save_frame(&result.image, &output)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    println!("\n{eye} image saved to {}", output.display());

    Ok(())
}

fn build_config_from_args(args: &RunArgs) -> Result<PipelineConfig> {
    let crop = if args.crop {
        // The default ellipse depends on the frame size, so peek at the first still.
        let first = args
            .files
            .first()
            .context("No input files given")?;
        let frame = load_frame(first)
            .with_context(|| format!("Failed to load {}", first.display()))?;
        Some(EllipseSpec::centered(frame.width(), frame.height()))
    } else {
        None
    };

    Ok(PipelineConfig {
        red_free: args.red_free,
        burst: BurstConfig {
            count: args.count.unwrap_or(args.files.len()),
            inter_frame_delay_ms: args.delay_ms,
        },
        crop,
        enhancement: args.enhance.then(EnhanceParams::default),
    })
}
