//! Stereo sample buffer passed between pipeline stages.
//!
//! [`SampleBuffer`] holds a pair of planar `Vec<f32>` channels plus the
//! sample rate they were recorded at. Every stage consumes one buffer and
//! produces another with the same sample rate and (except trimming) the same
//! frame count.

use crate::error::{Result, ValidationError};

/// A stereo buffer of `f32` samples nominally in `[-1.0, 1.0]`.
///
/// Values may exceed that range between stages (a reverb with a dry gain
/// of 2.0, for example); the normalizer brings them back before export.
///
/// # Example
///
/// ```rust
/// use orbit_core::SampleBuffer;
///
/// let buffer = SampleBuffer::new(vec![1.0; 1024], vec![0.5; 1024], 44100).unwrap();
/// assert_eq!(buffer.len(), 1024);
/// assert_eq!(buffer.peak(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    left: Vec<f32>,
    right: Vec<f32>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Create a buffer from left and right channels.
    ///
    /// Fails if the channels differ in length or the sample rate is zero.
    pub fn new(left: Vec<f32>, right: Vec<f32>, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(ValidationError::ZeroSampleRate.into());
        }
        if left.len() != right.len() {
            return Err(ValidationError::InvalidFormat {
                param: "buffer".to_string(),
                reason: format!(
                    "channel lengths differ (left {}, right {})",
                    left.len(),
                    right.len()
                ),
            }
            .into());
        }
        Ok(Self {
            left,
            right,
            sample_rate,
        })
    }

    /// Create a buffer of `frames` zero samples.
    pub fn silence(frames: usize, sample_rate: u32) -> Result<Self> {
        Self::new(vec![0.0; frames], vec![0.0; frames], sample_rate)
    }

    /// Create a stereo buffer from mono by duplicating to both channels.
    pub fn from_mono(mono: Vec<f32>, sample_rate: u32) -> Result<Self> {
        Self::new(mono.clone(), mono, sample_rate)
    }

    /// Create from interleaved format (L, R, L, R, ...).
    ///
    /// A trailing odd sample is dropped.
    pub fn from_interleaved(interleaved: &[f32], sample_rate: u32) -> Result<Self> {
        let len = interleaved.len() / 2;
        let mut left = Vec::with_capacity(len);
        let mut right = Vec::with_capacity(len);

        for chunk in interleaved.chunks_exact(2) {
            left.push(chunk[0]);
            right.push(chunk[1]);
        }

        Self::new(left, right, sample_rate)
    }

    /// Convert to interleaved format (L, R, L, R, ...).
    pub fn to_interleaved(&self) -> Vec<f32> {
        let mut interleaved = Vec::with_capacity(self.left.len() * 2);
        for (l, r) in self.frames() {
            interleaved.push(l);
            interleaved.push(r);
        }
        interleaved
    }

    /// Number of frames (samples per channel).
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Check if the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.left.len() as f64 / f64::from(self.sample_rate)
    }

    /// Left channel samples.
    pub fn left(&self) -> &[f32] {
        &self.left
    }

    /// Right channel samples.
    pub fn right(&self) -> &[f32] {
        &self.right
    }

    /// Mutable access to both channels at once.
    pub fn channels_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        (&mut self.left, &mut self.right)
    }

    /// Iterate over `(left, right)` frames.
    pub fn frames(&self) -> impl Iterator<Item = (f32, f32)> + Clone + '_ {
        self.left.iter().copied().zip(self.right.iter().copied())
    }

    /// Maximum absolute sample value across both channels.
    pub fn peak(&self) -> f32 {
        self.left
            .iter()
            .chain(self.right.iter())
            .fold(0.0f32, |acc, s| acc.max(s.abs()))
    }

    /// Copy of frames `start..end`, clamped to the buffer length.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.len());
        let start = start.min(end);
        Self {
            left: self.left[start..end].to_vec(),
            right: self.right[start..end].to_vec(),
            sample_rate: self.sample_rate,
        }
    }

    /// Multiply every sample by `gain`.
    pub fn scale(&mut self, gain: f32) {
        for sample in self.left.iter_mut().chain(self.right.iter_mut()) {
            *sample *= gain;
        }
    }

    /// Returns `true` if `other` has the same frame count and sample rate.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.len() == other.len() && self.sample_rate == other.sample_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn rejects_mismatched_channels() {
        let err = SampleBuffer::new(vec![0.0; 4], vec![0.0; 3], 44100).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn rejects_zero_sample_rate() {
        let err = SampleBuffer::silence(4, 0).unwrap_err();
        assert_eq!(err, Error::Validation(ValidationError::ZeroSampleRate));
    }

    #[test]
    fn interleave_roundtrip() {
        let buffer = SampleBuffer::from_interleaved(&[0.1, 0.2, 0.3, 0.4, 0.5], 48000).unwrap();
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.left(), &[0.1, 0.3]);
        assert_eq!(buffer.right(), &[0.2, 0.4]);
        assert_eq!(buffer.to_interleaved(), vec![0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn mono_duplicates_channels() {
        let buffer = SampleBuffer::from_mono(vec![0.25, -0.5], 22050).unwrap();
        assert_eq!(buffer.left(), buffer.right());
        assert_eq!(buffer.peak(), 0.5);
    }

    #[test]
    fn slice_clamps_to_length() {
        let buffer = SampleBuffer::from_mono((0..10).map(|i| i as f32).collect(), 10).unwrap();
        let sliced = buffer.slice(8, 100);
        assert_eq!(sliced.left(), &[8.0, 9.0]);
        assert!(buffer.slice(20, 30).is_empty());
    }

    #[test]
    fn duration_from_sample_rate() {
        let buffer = SampleBuffer::silence(22050, 44100).unwrap();
        assert!((buffer.duration_secs() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn peak_of_silence_is_zero() {
        let buffer = SampleBuffer::silence(128, 44100).unwrap();
        assert_eq!(buffer.peak(), 0.0);
    }
}
