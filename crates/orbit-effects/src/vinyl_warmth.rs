//! Vinyl warmth: low-pass roll-off followed by tanh saturation.
//!
//! ```text
//! cutoff = clamp(16000 - warmth · 12000, 2000, 0.45 · sample_rate)
//! y      = onepole(x)                  (sequential scan, y[0] = x[0])
//! y      = tanh(y · (1 + 3 · warmth))
//! y      = y · 0.99 / peak             (only when peak > 0.99)
//! ```
//!
//! Intermediate math runs in `f64`; the result is converted back to `f32`.

use orbit_core::{Effect, OnePole, ParamKey, ParameterSet, Result, SampleBuffer};

const WARMTH_THRESHOLD: f32 = 0.01;
const CEILING: f64 = 0.99;

/// Low-pass cutoff in Hz for a warmth amount.
pub fn cutoff_hz(warmth: f32, sample_rate: u32) -> f64 {
    let cutoff = 16000.0 - f64::from(warmth) * 12000.0;
    cutoff.min(0.45 * f64::from(sample_rate)).max(2000.0)
}

/// Saturation gain for a warmth amount, 1x to 4x.
pub fn drive(warmth: f32) -> f64 {
    1.0 + f64::from(warmth) * 3.0
}

/// Analog-style warmth: darker top end plus gentle soft clipping.
///
/// # Parameters
///
/// - `vinyl_warmth`: 0.0–1.0 (default 0.3)
///
/// The output peak never exceeds 0.99.
#[derive(Debug, Clone, Copy, Default)]
pub struct VinylWarmth;

impl VinylWarmth {
    fn process_channel(filter: &OnePole, channel: &[f32], drive: f64) -> Vec<f64> {
        let mut samples: Vec<f64> = channel.iter().map(|&s| f64::from(s)).collect();
        filter.filter(&mut samples);
        for s in &mut samples {
            *s = (*s * drive).tanh();
        }
        samples
    }
}

impl Effect for VinylWarmth {
    fn id(&self) -> &'static str {
        "vinyl_warmth"
    }

    fn display_name(&self) -> &'static str {
        "Vinyl Warmth"
    }

    fn params(&self) -> &'static [ParamKey] {
        &[ParamKey::VinylWarmth]
    }

    fn apply(&self, buffer: &SampleBuffer, params: &ParameterSet) -> Result<SampleBuffer> {
        let warmth = params.vinyl_warmth();
        if warmth <= WARMTH_THRESHOLD {
            return Ok(buffer.clone());
        }

        let sample_rate = buffer.sample_rate();
        let filter = OnePole::new(f64::from(sample_rate), cutoff_hz(warmth, sample_rate));
        let drive = drive(warmth);

        let left = Self::process_channel(&filter, buffer.left(), drive);
        let right = Self::process_channel(&filter, buffer.right(), drive);

        let peak = left
            .iter()
            .chain(&right)
            .fold(0.0f64, |acc, s| acc.max(s.abs()));
        let gain = if peak > CEILING { CEILING / peak } else { 1.0 };

        let to_f32 = |channel: Vec<f64>| -> Vec<f32> {
            channel.into_iter().map(|s| (s * gain) as f32).collect()
        };
        SampleBuffer::new(to_f32(left), to_f32(right), sample_rate)
    }
}
