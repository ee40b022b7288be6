//! Single-file conversion command.

use std::path::PathBuf;

use clap::Args;
use indicatif::ProgressBar;
use orbit_io::{BitDepth, convert_file_with, default_output_path};

use super::common::{EffectArgs, parse_bit_depth, stage_style};

#[derive(Args)]
pub struct ConvertArgs {
    /// Input audio file (wav, mp3, flac, ogg, aac, m4a)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file [default: <INPUT stem>_8d.wav]
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Write next to the input as <stem>_8d.wav
    #[arg(long, conflicts_with = "output")]
    auto_output: bool,

    #[command(flatten)]
    effect: EffectArgs,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "16", value_parser = parse_bit_depth)]
    bit_depth: BitDepth,

    /// Suppress progress and summary output
    #[arg(short, long)]
    quiet: bool,
}

pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let (chain, params) = args.effect.resolve()?;
    let output = match args.output {
        Some(path) if !args.auto_output => path,
        _ => default_output_path(&args.input),
    };

    if !args.quiet {
        println!("Reading {}...", args.input.display());
    }

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(chain.len() as u64)
    };
    pb.set_style(stage_style());
    pb.set_prefix("effects");

    let mut observer = |index: usize, _total: usize, label: &str| {
        pb.set_position(index as u64);
        pb.set_message(label.to_string());
    };
    let result = convert_file_with(
        &args.input,
        &output,
        &chain,
        &params,
        args.bit_depth,
        &mut observer,
    );

    let summary = match result {
        Ok(summary) => {
            pb.finish_with_message("done");
            summary
        }
        Err(e) => {
            pb.abandon_with_message("failed");
            return Err(e.into());
        }
    };

    if !args.quiet {
        println!(
            "  {} frames, {} Hz, {:.2}s",
            summary.output_frames, summary.sample_rate, summary.duration_secs
        );
        println!("Wrote {}", output.display());
    }
    Ok(())
}
