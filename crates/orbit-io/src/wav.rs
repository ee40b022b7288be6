//! WAV file reading and writing.

use crate::Result;
use crate::format::BitDepth;
use hound::{SampleFormat, WavReader, WavWriter};
use orbit_core::SampleBuffer;
use std::path::Path;

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone, PartialEq)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// `true` for IEEE float samples, `false` for integer PCM.
    pub is_float: bool,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    // hound reports the total across all channels
    let num_frames = u64::from(reader.len()) / u64::from(spec.channels.max(1));
    let duration_secs = num_frames as f64 / f64::from(spec.sample_rate);

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        is_float: spec.sample_format == SampleFormat::Float,
        num_frames,
        duration_secs,
    })
}

/// Fold interleaved samples with any channel count into a stereo buffer.
///
/// Mono is duplicated to both channels; anything wider keeps its first two
/// channels.
pub(crate) fn interleaved_to_stereo(
    samples: &[f32],
    channels: usize,
    sample_rate: u32,
) -> Result<SampleBuffer> {
    let buffer = match channels {
        0 => {
            return Err(crate::Error::Decode("stream reports zero channels".into()));
        }
        1 => SampleBuffer::from_mono(samples.to_vec(), sample_rate)?,
        2 => SampleBuffer::from_interleaved(samples, sample_rate)?,
        _ => {
            let frames = samples.len() / channels;
            let mut left = Vec::with_capacity(frames);
            let mut right = Vec::with_capacity(frames);
            for chunk in samples.chunks_exact(channels) {
                left.push(chunk[0]);
                right.push(chunk[1]);
            }
            SampleBuffer::new(left, right, sample_rate)?
        }
    };
    Ok(buffer)
}

/// Read a WAV file as a stereo buffer.
///
/// Integer PCM of any width is scaled to `[-1.0, 1.0)`.
pub fn read_wav_stereo<P: AsRef<Path>>(path: P) -> Result<SampleBuffer> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    interleaved_to_stereo(&samples, usize::from(spec.channels), spec.sample_rate)
}

/// Write a stereo buffer to a WAV file.
///
/// Integer depths clamp to the representable range; float output is written
/// as-is.
///
/// # Example
/// ```rust,no_run
/// use orbit_core::SampleBuffer;
/// use orbit_io::{BitDepth, write_wav_stereo};
///
/// let buffer = SampleBuffer::silence(44100, 44100).unwrap();
/// write_wav_stereo("silence.wav", &buffer, BitDepth::Int16)?;
/// # Ok::<(), orbit_io::Error>(())
/// ```
pub fn write_wav_stereo<P: AsRef<Path>>(
    path: P,
    buffer: &SampleBuffer,
    bit_depth: BitDepth,
) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: buffer.sample_rate(),
        bits_per_sample: bit_depth.bits(),
        sample_format: match bit_depth {
            BitDepth::Float32 => SampleFormat::Float,
            BitDepth::Int16 | BitDepth::Int24 => SampleFormat::Int,
        },
    };
    let mut writer = WavWriter::create(path, spec)?;

    if bit_depth == BitDepth::Float32 {
        for (l, r) in buffer.frames() {
            writer.write_sample(l)?;
            writer.write_sample(r)?;
        }
    } else {
        let max_val = (1i32 << (bit_depth.bits() - 1)) as f32;
        for (l, r) in buffer.frames() {
            let int_l = (l * max_val).clamp(-max_val, max_val - 1.0) as i32;
            let int_r = (r * max_val).clamp(-max_val, max_val - 1.0) as i32;
            writer.write_sample(int_l)?;
            writer.write_sample(int_r)?;
        }
    }

    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn write_raw(path: &Path, channels: u16, samples: &[i16]) {
        let spec = hound::WavSpec {
            channels,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_roundtrip_f32() {
        let left: Vec<f32> = (0..1000).map(|i| (i as f32 / 1000.0).sin()).collect();
        let right: Vec<f32> = (0..1000).map(|i| (i as f32 / 1000.0).cos()).collect();
        let buffer = SampleBuffer::new(left, right, 48000).unwrap();

        let file = NamedTempFile::new().unwrap();
        write_wav_stereo(file.path(), &buffer, BitDepth::Float32).unwrap();

        let loaded = read_wav_stereo(file.path()).unwrap();
        assert_eq!(loaded, buffer);
    }

    #[test]
    fn test_roundtrip_i16() {
        let mono: Vec<f32> = (0..1000).map(|i| (i as f32 / 1000.0).sin() * 0.9).collect();
        let buffer = SampleBuffer::from_mono(mono, 44100).unwrap();

        let file = NamedTempFile::new().unwrap();
        write_wav_stereo(file.path(), &buffer, BitDepth::Int16).unwrap();

        let loaded = read_wav_stereo(file.path()).unwrap();
        assert_eq!(loaded.sample_rate(), 44100);
        assert_eq!(loaded.len(), buffer.len());
        for (a, b) in buffer.left().iter().zip(loaded.left()) {
            assert!((a - b).abs() < 0.001);
        }
    }

    #[test]
    fn test_roundtrip_i24() {
        let buffer = SampleBuffer::from_mono(vec![0.5, -0.25, 0.125], 96000).unwrap();
        let file = NamedTempFile::new().unwrap();
        write_wav_stereo(file.path(), &buffer, BitDepth::Int24).unwrap();

        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.bits_per_sample, 24);
        let loaded = read_wav_stereo(file.path()).unwrap();
        for (a, b) in buffer.left().iter().zip(loaded.left()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_clamps_hot_samples() {
        let buffer = SampleBuffer::from_mono(vec![1.5, -1.5], 44100).unwrap();
        let file = NamedTempFile::new().unwrap();
        write_wav_stereo(file.path(), &buffer, BitDepth::Int16).unwrap();

        let loaded = read_wav_stereo(file.path()).unwrap();
        assert!((loaded.left()[0] - 32767.0 / 32768.0).abs() < 1e-6);
        assert_eq!(loaded.left()[1], -1.0);
    }

    #[test]
    fn test_read_mono_as_stereo() {
        let file = NamedTempFile::new().unwrap();
        write_raw(file.path(), 1, &[0, 16384, -16384]);

        let stereo = read_wav_stereo(file.path()).unwrap();
        assert_eq!(stereo.left(), &[0.0, 0.5, -0.5]);
        assert_eq!(stereo.right(), stereo.left());
    }

    #[test]
    fn test_multichannel_keeps_first_two() {
        let file = NamedTempFile::new().unwrap();
        // 2 frames of 4 channels
        write_raw(file.path(), 4, &[100, 200, 300, 400, 500, 600, 700, 800]);

        let stereo = read_wav_stereo(file.path()).unwrap();
        assert_eq!(stereo.len(), 2);
        assert_eq!(stereo.left()[1], 500.0 / 32768.0);
        assert_eq!(stereo.right()[1], 600.0 / 32768.0);
    }

    #[test]
    fn test_read_info() {
        let file = NamedTempFile::new().unwrap();
        write_raw(file.path(), 2, &[0; 44100]);

        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.channels, 2);
        assert_eq!(info.sample_rate, 22050);
        assert_eq!(info.num_frames, 22050);
        assert!((info.duration_secs - 1.0).abs() < 1e-9);
        assert!(!info.is_float);
    }
}
