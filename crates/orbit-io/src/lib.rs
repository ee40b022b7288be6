//! Audio file I/O for the orbit pipeline.
//!
//! This crate sits around the processing core:
//!
//! - **Decoding**: [`decode_file`] reads WAV through `hound` and MP3, FLAC,
//!   Ogg Vorbis and AAC/M4A through `symphonia`, always producing a stereo
//!   [`SampleBuffer`](orbit_core::SampleBuffer)
//! - **Encoding**: [`write_wav_stereo`] exports 16/24-bit PCM or 32-bit float
//! - **Conversion**: [`convert_file`] runs decode, duration guard, effect
//!   chain and export as one operation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use orbit_core::ParameterSet;
//! use orbit_effects::{EffectChain, NoProgress};
//! use orbit_io::{convert_file, default_output_path};
//! use std::path::Path;
//!
//! let input = Path::new("song.mp3");
//! let output = default_output_path(input);
//! convert_file(input, &output, &EffectChain::default(), &ParameterSet::default(), &mut NoProgress)?;
//! # Ok::<(), orbit_io::Error>(())
//! ```

mod convert;
mod decode;
mod format;
mod wav;

pub use convert::{
    ConvertSummary, MAX_DURATION_SECS, convert_file, convert_file_with, default_output_path,
};
pub use decode::{AudioInfo, decode_file, probe};
pub use format::{AudioFormat, BitDepth};
pub use wav::{WavInfo, read_wav_info, read_wav_stereo, write_wav_stereo};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Validation or processing failure inside the effect chain.
    #[error(transparent)]
    Core(#[from] orbit_core::Error),

    /// The file extension or codec is not handled.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// A compressed file could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Input is longer than [`MAX_DURATION_SECS`].
    #[error("input is {duration_secs:.1}s long, the limit is {max_secs:.0}s")]
    TooLong {
        /// Duration of the rejected input.
        duration_secs: f64,
        /// Configured limit.
        max_secs: f64,
    },

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<orbit_core::ValidationError> for Error {
    fn from(err: orbit_core::ValidationError) -> Self {
        Error::Core(err.into())
    }
}

impl From<symphonia::core::errors::Error> for Error {
    fn from(err: symphonia::core::errors::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
