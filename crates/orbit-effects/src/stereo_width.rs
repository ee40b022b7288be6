//! Haas-effect stereo widener.
//!
//! Delaying one channel by a few milliseconds makes the ear localize the
//! source towards the earlier channel while both channels still carry the
//! full signal, which reads as "wider". The delay is `stereo_width · 20` ms.
//!
//! The first `d` frames of the delayed right channel are filled with the
//! head of the original right channel rather than silence.

use orbit_core::{Effect, ParamKey, ParameterSet, Result, SampleBuffer, ms_to_samples};

/// Maximum Haas delay, reached at `stereo_width = 1.0`.
pub const MAX_DELAY_MS: f64 = 20.0;

/// Widths at or below this are treated as off.
const WIDTH_THRESHOLD: f32 = 0.01;

/// Haas stereo widener.
///
/// # Parameters
///
/// - `stereo_width`: 0.0–1.0 (default 0.5), right-channel delay of 0–20 ms
#[derive(Debug, Clone, Copy, Default)]
pub struct StereoWidth;

impl StereoWidth {
    /// Delay in frames for `width` at `sample_rate`.
    pub fn delay_frames(width: f32, sample_rate: u32) -> usize {
        ms_to_samples(f64::from(width) * MAX_DELAY_MS, sample_rate)
    }
}

impl Effect for StereoWidth {
    fn id(&self) -> &'static str {
        "stereo_width"
    }

    fn display_name(&self) -> &'static str {
        "Stereo Width"
    }

    fn params(&self) -> &'static [ParamKey] {
        &[ParamKey::StereoWidth]
    }

    fn apply(&self, buffer: &SampleBuffer, params: &ParameterSet) -> Result<SampleBuffer> {
        let width = params.stereo_width();
        let delay = Self::delay_frames(width, buffer.sample_rate());
        if width <= WIDTH_THRESHOLD || delay == 0 {
            return Ok(buffer.clone());
        }

        let original = buffer.right();
        let mut widened = buffer.clone();
        let (_, right) = widened.channels_mut();
        let head = delay.min(original.len());
        right[..head].copy_from_slice(&original[..head]);
        if delay < original.len() {
            right[delay..].copy_from_slice(&original[..original.len() - delay]);
        }

        Ok(widened)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: u32 = 44100;

    fn ramp(frames: usize) -> SampleBuffer {
        let mono: Vec<f32> = (0..frames).map(|i| i as f32 / frames as f32).collect();
        SampleBuffer::from_mono(mono, SR).unwrap()
    }

    #[test]
    fn identity_at_low_width() {
        let input = ramp(4410);
        for width in [0.0, 0.005, 0.01] {
            let params = ParameterSet::default().with_stereo_width(width);
            assert_eq!(StereoWidth.apply(&input, &params).unwrap(), input);
        }
    }

    #[test]
    fn identity_when_delay_rounds_to_zero() {
        // 0.02 · 20 ms at 1 kHz is 0.4 frames
        let input = SampleBuffer::from_mono(vec![0.5; 100], 1000).unwrap();
        let params = ParameterSet::default().with_stereo_width(0.02);
        assert_eq!(StereoWidth.apply(&input, &params).unwrap(), input);
    }

    #[test]
    fn delays_right_channel() {
        let input = ramp(44100);
        let params = ParameterSet::default().with_stereo_width(0.5);
        let output = StereoWidth.apply(&input, &params).unwrap();

        let d = StereoWidth::delay_frames(0.5, SR);
        assert_eq!(d, 441);
        assert_eq!(output.left(), input.left());
        for i in d..input.len() {
            assert_eq!(output.right()[i], input.right()[i - d]);
        }
    }

    #[test]
    fn head_is_wrap_padded() {
        let input = ramp(44100);
        let params = ParameterSet::default().with_stereo_width(1.0);
        let output = StereoWidth.apply(&input, &params).unwrap();

        let d = StereoWidth::delay_frames(1.0, SR);
        assert_eq!(&output.right()[..d], &input.right()[..d]);
    }

    #[test]
    fn delay_longer_than_buffer() {
        let input = ramp(100);
        let params = ParameterSet::default().with_stereo_width(1.0);
        let output = StereoWidth.apply(&input, &params).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn preserves_shape() {
        let input = ramp(10_000);
        let output = StereoWidth.apply(&input, &ParameterSet::default()).unwrap();
        assert!(output.same_shape(&input));
    }
}
