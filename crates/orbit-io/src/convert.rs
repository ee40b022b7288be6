//! File-to-file conversion: decode, guard, process, export.

use std::path::{Path, PathBuf};

use orbit_core::ParameterSet;
use orbit_effects::{EffectChain, ProgressObserver, run_chain};

use crate::decode::{decode_file, probe};
use crate::format::{AudioFormat, BitDepth};
use crate::wav::write_wav_stereo;
use crate::{Error, Result};

/// Longest input accepted, in seconds.
pub const MAX_DURATION_SECS: f64 = 600.0;

/// What a successful conversion produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertSummary {
    /// Frames decoded from the input.
    pub input_frames: usize,
    /// Frames written to the output (fewer when trimmed).
    pub output_frames: usize,
    /// Sample rate of both files.
    pub sample_rate: u32,
    /// Output duration in seconds.
    pub duration_secs: f64,
}

/// `<dir>/<stem>_8d.wav` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "output".into(), |s| s.to_string_lossy());
    input.with_file_name(format!("{stem}_8d.wav"))
}

fn check_duration(duration_secs: f64) -> Result<()> {
    if duration_secs > MAX_DURATION_SECS {
        return Err(Error::TooLong {
            duration_secs,
            max_secs: MAX_DURATION_SECS,
        });
    }
    Ok(())
}

/// Convert `input` to a 16-bit WAV at `output`.
///
/// See [`convert_file_with`].
pub fn convert_file<O>(
    input: &Path,
    output: &Path,
    chain: &EffectChain,
    params: &ParameterSet,
    observer: &mut O,
) -> Result<ConvertSummary>
where
    O: ProgressObserver + ?Sized,
{
    convert_file_with(input, output, chain, params, BitDepth::default(), observer)
}

/// Convert `input` to a WAV at `output` with the given bit depth.
///
/// Parameters and the output extension are checked before anything is
/// decoded. Inputs longer than [`MAX_DURATION_SECS`] are rejected, using the
/// container header when it reports a length and the decoded length
/// otherwise. If writing fails, the partial output file is removed.
///
/// # Errors
///
/// Any decode, validation, processing or write failure. Nothing is written
/// unless the effect chain succeeds.
pub fn convert_file_with<O>(
    input: &Path,
    output: &Path,
    chain: &EffectChain,
    params: &ParameterSet,
    bit_depth: BitDepth,
    observer: &mut O,
) -> Result<ConvertSummary>
where
    O: ProgressObserver + ?Sized,
{
    params.validate()?;
    AudioFormat::check_output(output)?;

    let info = probe(input)?;
    if let Some(duration) = info.duration_secs() {
        check_duration(duration)?;
    }

    let buffer = decode_file(input)?;
    check_duration(buffer.duration_secs())?;

    tracing::info!(
        input = %input.display(),
        frames = buffer.len(),
        sample_rate = buffer.sample_rate(),
        effects = ?chain.ids(),
        "processing"
    );
    let processed = run_chain(&buffer, chain, params, observer)?;

    if let Err(e) = write_wav_stereo(output, &processed, bit_depth) {
        if output.exists()
            && let Err(rm) = std::fs::remove_file(output)
        {
            tracing::warn!(path = %output.display(), error = %rm, "could not remove partial output");
        }
        return Err(e);
    }

    let summary = ConvertSummary {
        input_frames: buffer.len(),
        output_frames: processed.len(),
        sample_rate: processed.sample_rate(),
        duration_secs: processed.duration_secs(),
    };
    tracing::info!(
        output = %output.display(),
        frames = summary.output_frames,
        bits = bit_depth.bits(),
        "wrote"
    );
    Ok(summary)
}
