//! Parallel conversion of many files.

use std::collections::HashSet;
use std::fs::File;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Context;
use clap::Args;
use indicatif::{MultiProgress, ProgressBar};
use orbit_core::ParameterSet;
use orbit_effects::EffectChain;
use orbit_io::{BitDepth, convert_file_with, default_output_path};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::common::{EffectArgs, parse_bit_depth, stage_style};
use crate::jobs::{JobId, JobRecord, JobStatus, JobStore};

#[derive(Args)]
pub struct BatchArgs {
    /// Input audio files
    #[arg(value_name = "INPUT", required = true, num_args = 1..)]
    inputs: Vec<PathBuf>,

    /// Directory for the converted files
    #[arg(short, long, value_name = "DIR")]
    out_dir: PathBuf,

    #[command(flatten)]
    effect: EffectArgs,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "16", value_parser = parse_bit_depth)]
    bit_depth: BitDepth,

    /// Worker threads [default: number of CPUs]
    #[arg(short, long)]
    jobs: Option<NonZeroUsize>,

    /// Suppress progress bars
    #[arg(short, long)]
    quiet: bool,

    /// Also bundle the converted files into a zip archive
    #[arg(long, value_name = "PATH")]
    zip: Option<PathBuf>,
}

/// `<out_dir>/<stem>_8d.wav`, with a numeric suffix when two inputs share a stem.
fn output_paths(inputs: &[PathBuf], out_dir: &Path) -> Vec<PathBuf> {
    let mut taken = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let file_name = default_output_path(input)
                .file_name()
                .map_or_else(|| "output_8d.wav".into(), ToOwned::to_owned);
            let mut path = out_dir.join(&file_name);
            let mut n = 2;
            while !taken.insert(path.clone()) {
                let stem = Path::new(&file_name)
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                path = out_dir.join(format!("{stem}-{n}.wav"));
                n += 1;
            }
            path
        })
        .collect()
}

/// Archive name for the job at 1-based `position`: `NN_<stem>_8d.<ext>`.
fn bundle_entry_name(position: usize, record: &JobRecord) -> String {
    let stem = record
        .input
        .file_stem()
        .map_or_else(|| "output".into(), |s| s.to_string_lossy());
    let ext = record
        .output
        .extension()
        .map_or_else(|| "wav".into(), |e| e.to_string_lossy());
    format!("{position:02}_{stem}_8d.{ext}")
}

/// Write every completed output in `records` into a DEFLATE zip at `path`.
///
/// Failed jobs and outputs missing from disk are skipped. Returns the number
/// of entries written.
fn write_bundle(records: &[(JobId, JobRecord)], path: &Path) -> anyhow::Result<usize> {
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut written = 0;
    for (id, record) in records {
        if record.status != JobStatus::Completed || !record.output.exists() {
            continue;
        }
        let name = bundle_entry_name(id + 1, record);
        let mut source = File::open(&record.output)
            .with_context(|| format!("cannot read {}", record.output.display()))?;
        zip.start_file(name.as_str(), options)?;
        std::io::copy(&mut source, &mut zip)
            .with_context(|| format!("cannot add {name} to {}", path.display()))?;
        written += 1;
    }
    zip.finish()?;
    Ok(written)
}

struct Batch<'a> {
    store: &'a JobStore,
    chain: &'a EffectChain,
    params: &'a ParameterSet,
    bit_depth: BitDepth,
}

impl Batch<'_> {
    fn run_job(&self, id: JobId, bar: &ProgressBar) {
        let Some(job) = self.store.get(id) else {
            return;
        };
        self.store.start(id);
        bar.set_message("decoding");

        let mut observer = |index: usize, total: usize, label: &str| {
            self.store.progress(id, index, total, label);
            bar.set_position(index as u64);
            bar.set_message(label.to_string());
        };
        let result = convert_file_with(
            &job.input,
            &job.output,
            self.chain,
            self.params,
            self.bit_depth,
            &mut observer,
        );

        match result {
            Ok(summary) => {
                tracing::info!(input = %job.input.display(), frames = summary.output_frames, "job done");
                self.store.finish(id, Ok(()));
                bar.finish_with_message("done");
            }
            Err(e) => {
                tracing::warn!(input = %job.input.display(), error = %e, "job failed");
                bar.abandon_with_message(format!("failed: {e}"));
                self.store.finish(id, Err(e.to_string()));
            }
        }
    }
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let (chain, params) = args.effect.resolve()?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("cannot create {}", args.out_dir.display()))?;

    let store = JobStore::new();
    let outputs = output_paths(&args.inputs, &args.out_dir);
    let ids: Vec<JobId> = args
        .inputs
        .iter()
        .zip(outputs)
        .map(|(input, output)| store.insert(input.clone(), output))
        .collect();

    let multi = MultiProgress::new();
    let bars: Vec<ProgressBar> = args
        .inputs
        .iter()
        .map(|input| {
            let bar = if args.quiet {
                ProgressBar::hidden()
            } else {
                multi.add(ProgressBar::new(chain.len() as u64))
            };
            bar.set_style(stage_style());
            let name = input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            bar.set_prefix(name);
            bar.set_message("queued");
            bar
        })
        .collect();

    let workers = args
        .jobs
        .or_else(|| std::thread::available_parallelism().ok())
        .map_or(1, NonZeroUsize::get)
        .min(ids.len());
    tracing::info!(jobs = ids.len(), workers, "starting batch");

    let batch = Batch {
        store: &store,
        chain: &chain,
        params: &params,
        bit_depth: args.bit_depth,
    };
    let next = AtomicUsize::new(0);
    std::thread::scope(|s| {
        for _ in 0..workers {
            s.spawn(|| {
                loop {
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    let (Some(&id), Some(bar)) = (ids.get(i), bars.get(i)) else {
                        break;
                    };
                    batch.run_job(id, bar);
                }
            });
        }
    });

    let failed = store.count(JobStatus::Failed);
    let bundled = match &args.zip {
        Some(path) => {
            let count = write_bundle(&store.snapshot(), path)?;
            tracing::info!(path = %path.display(), entries = count, "wrote bundle");
            Some((path, count))
        }
        None => None,
    };
    if !args.quiet {
        println!();
        for (_, record) in store.snapshot() {
            match &record.error {
                None => println!("  ok      {}", record.output.display()),
                Some(err) => println!(
                    "  failed  {} at {} ({:.0}%): {err}",
                    record.input.display(),
                    record.step,
                    record.progress * 100.0
                ),
            }
        }
        println!(
            "\n{} converted, {failed} failed",
            store.count(JobStatus::Completed)
        );
        if let Some((path, count)) = bundled {
            println!("Bundled {count} file(s) into {}", path.display());
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} jobs failed", ids.len());
    }
    Ok(())
}
