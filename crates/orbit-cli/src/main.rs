//! Orbit CLI - turn stereo tracks into rotating "8D" audio.

mod commands;
mod jobs;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "orbit")]
#[command(author, version, about = "8D audio conversion", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one audio file
    Convert(commands::convert::ConvertArgs),

    /// Convert many files in parallel
    Batch(commands::batch::BatchArgs),

    /// List available effects and their parameters
    Effects(commands::effects::EffectsArgs),

    /// List, show and save presets
    Presets(commands::presets::PresetsArgs),

    /// Show audio file metadata
    Info(commands::info::InfoArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Batch(args) => commands::batch::run(args),
        Commands::Effects(args) => commands::effects::run(args),
        Commands::Presets(args) => commands::presets::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}
