//! Decoding of every supported input format into a stereo buffer.
//!
//! WAV goes through `hound`; everything else is probed and decoded with
//! `symphonia`, packet by packet, into interleaved `f32`.

use std::fs::File;
use std::path::Path;

use orbit_core::SampleBuffer;
use symphonia::core::audio::SampleBuffer as DecodedSamples;
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::format::AudioFormat;
use crate::wav::{interleaved_to_stereo, read_wav_info, read_wav_stereo};
use crate::{Error, Result};

/// Stream metadata read from the container header.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioInfo {
    /// Detected container format.
    pub format: AudioFormat,
    /// Channel count, if the container declares it.
    pub channels: Option<usize>,
    /// Sample rate in Hz, if the container declares it.
    pub sample_rate: Option<u32>,
    /// Frames per channel, if known without decoding.
    pub num_frames: Option<u64>,
}

impl AudioInfo {
    /// Duration in seconds, if both frame count and rate are known.
    pub fn duration_secs(&self) -> Option<f64> {
        match (self.num_frames, self.sample_rate) {
            (Some(frames), Some(rate)) if rate > 0 => Some(frames as f64 / f64::from(rate)),
            _ => None,
        }
    }
}

fn open_format(path: &Path) -> Result<Box<dyn FormatReader>> {
    let file = File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| match e {
            SymphoniaError::Unsupported(what) => Error::UnsupportedFormat(what.to_string()),
            other => Error::Decode(format!("failed to probe '{}': {other}", path.display())),
        })?;
    Ok(probed.format)
}

/// Read header metadata without decoding audio.
pub fn probe(path: &Path) -> Result<AudioInfo> {
    let format = AudioFormat::from_path(path)?;
    if format == AudioFormat::Wav {
        let info = read_wav_info(path)?;
        return Ok(AudioInfo {
            format,
            channels: Some(usize::from(info.channels)),
            sample_rate: Some(info.sample_rate),
            num_frames: Some(info.num_frames),
        });
    }

    let reader = open_format(path)?;
    let track = reader
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::Decode("no audio track found".into()))?;
    let params = &track.codec_params;

    Ok(AudioInfo {
        format,
        channels: params.channels.map(|c| c.count()),
        sample_rate: params.sample_rate,
        num_frames: params.n_frames,
    })
}

/// Decode an audio file into a stereo buffer.
///
/// # Errors
///
/// [`Error::UnsupportedFormat`] for unknown extensions or codecs,
/// [`Error::Decode`] for corrupt or empty streams.
pub fn decode_file(path: &Path) -> Result<SampleBuffer> {
    let format = AudioFormat::from_path(path)?;
    let buffer = if format == AudioFormat::Wav {
        read_wav_stereo(path)?
    } else {
        decode_compressed(path)?
    };

    tracing::debug!(
        path = %path.display(),
        %format,
        frames = buffer.len(),
        sample_rate = buffer.sample_rate(),
        "decoded"
    );
    Ok(buffer)
}

fn decode_compressed(path: &Path) -> Result<SampleBuffer> {
    let mut reader = open_format(path)?;
    let track = reader
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::Decode("no audio track found".into()))?;
    let track_id = track.id;
    let mut sample_rate = track.codec_params.sample_rate;
    let mut channels = track.codec_params.channels.map(|c| c.count());

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| Error::UnsupportedFormat(format!("codec: {e}")))?;

    let mut interleaved: Vec<f32> = Vec::new();
    let mut scratch: Option<DecodedSamples<f32>> = None;

    loop {
        let packet = match reader.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(e) => return Err(e.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                sample_rate.get_or_insert(spec.rate);
                channels.get_or_insert(spec.channels.count());

                let needed = decoded.capacity() * spec.channels.count();
                if scratch.as_ref().is_none_or(|buf| buf.capacity() < needed) {
                    scratch = Some(DecodedSamples::<f32>::new(decoded.capacity() as u64, spec));
                }
                if let Some(buf) = scratch.as_mut() {
                    buf.copy_interleaved_ref(decoded);
                    interleaved.extend_from_slice(buf.samples());
                }
            }
            Err(SymphoniaError::DecodeError(e)) => {
                tracing::warn!(error = e, "skipping undecodable packet");
            }
            Err(e) => return Err(e.into()),
        }
    }

    let (Some(sample_rate), Some(channels)) = (sample_rate, channels) else {
        return Err(Error::Decode(format!(
            "'{}' contains no decodable audio",
            path.display()
        )));
    };
    interleaved_to_stereo(&interleaved, channels, sample_rate)
}
