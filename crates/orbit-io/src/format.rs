//! File formats accepted on input and produced on output.

use std::fmt;
use std::path::Path;

use crate::{Error, Result};

/// Container formats recognized by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    /// RIFF WAVE, read and written with `hound`.
    Wav,
    /// MPEG-1/2 Layer III.
    Mp3,
    /// Free Lossless Audio Codec.
    Flac,
    /// Ogg Vorbis.
    Ogg,
    /// Raw ADTS AAC.
    Aac,
    /// AAC in an MPEG-4 container.
    M4a,
}

impl AudioFormat {
    /// All recognized input formats.
    pub const ALL: [AudioFormat; 6] = [
        AudioFormat::Wav,
        AudioFormat::Mp3,
        AudioFormat::Flac,
        AudioFormat::Ogg,
        AudioFormat::Aac,
        AudioFormat::M4a,
    ];

    /// Lowercase file extension.
    pub const fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Flac => "flac",
            AudioFormat::Ogg => "ogg",
            AudioFormat::Aac => "aac",
            AudioFormat::M4a => "m4a",
        }
    }

    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| {
                Error::UnsupportedFormat(format!("'{}' has no file extension", path.display()))
            })?;
        Self::ALL
            .into_iter()
            .find(|f| f.extension() == ext)
            .ok_or_else(|| Error::UnsupportedFormat(format!(".{ext}")))
    }

    /// Check that `path` names a format this crate can write.
    ///
    /// Only WAV is encoded.
    pub fn check_output(path: &Path) -> Result<Self> {
        match Self::from_path(path)? {
            AudioFormat::Wav => Ok(AudioFormat::Wav),
            other => Err(Error::UnsupportedFormat(format!(
                "cannot encode .{}, only .wav output is supported",
                other.extension()
            ))),
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Sample encoding for WAV export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitDepth {
    /// 16-bit signed PCM.
    #[default]
    Int16,
    /// 24-bit signed PCM.
    Int24,
    /// 32-bit IEEE float.
    Float32,
}

impl BitDepth {
    /// Bits per sample.
    pub const fn bits(&self) -> u16 {
        match self {
            BitDepth::Int16 => 16,
            BitDepth::Int24 => 24,
            BitDepth::Float32 => 32,
        }
    }
}

impl TryFrom<u16> for BitDepth {
    type Error = Error;

    fn try_from(bits: u16) -> Result<Self> {
        match bits {
            16 => Ok(BitDepth::Int16),
            24 => Ok(BitDepth::Int24),
            32 => Ok(BitDepth::Float32),
            other => Err(Error::UnsupportedFormat(format!(
                "{other}-bit output (use 16, 24 or 32)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_extensions() {
        assert_eq!(AudioFormat::from_path(Path::new("a.wav")).unwrap(), AudioFormat::Wav);
        assert_eq!(AudioFormat::from_path(Path::new("b.MP3")).unwrap(), AudioFormat::Mp3);
        assert_eq!(
            AudioFormat::from_path(Path::new("dir/c.m4a")).unwrap(),
            AudioFormat::M4a
        );
    }

    #[test]
    fn rejects_unknown_extensions() {
        assert!(matches!(
            AudioFormat::from_path(Path::new("notes.txt")),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            AudioFormat::from_path(Path::new("noext")),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn only_wav_output() {
        assert!(AudioFormat::check_output(Path::new("out.wav")).is_ok());
        let err = AudioFormat::check_output(Path::new("out.flac")).unwrap_err();
        assert!(err.to_string().contains("flac"));
    }

    #[test]
    fn bit_depths() {
        assert_eq!(BitDepth::default().bits(), 16);
        assert_eq!(BitDepth::try_from(24).unwrap(), BitDepth::Int24);
        assert!(BitDepth::try_from(8).is_err());
    }
}
