mod commands;
mod progress;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fundus", about = "Smartphone fundus capture and enhancement tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image dimensions and sharpness
    Info(commands::info::InfoArgs),
    /// Score and rank images by sharpness
    Quality(commands::quality::QualityArgs),
    /// Replay images as a camera burst and keep the sharpest
    Burst(commands::burst::BurstArgs),
    /// Apply tile-adaptive contrast enhancement
    Enhance(commands::enhance::EnhanceArgs),
    /// Crop to an elliptical field of view
    Crop(commands::crop::CropArgs),
    /// Convert to a red-free (green channel) view
    RedFree(commands::red_free::RedFreeArgs),
    /// Run the full capture pipeline
    Run(commands::pipeline::RunArgs),
    /// Print the default pipeline config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Quality(args) => commands::quality::run(args),
        Commands::Burst(args) => commands::burst::run(args),
        Commands::Enhance(args) => commands::enhance::run(args),
        Commands::Crop(args) => commands::crop::run(args),
        Commands::RedFree(args) => commands::red_free::run(args),
        Commands::Run(args) => commands::pipeline::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
