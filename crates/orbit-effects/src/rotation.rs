//! 8D rotation (sinusoidal auto-pan).
//!
//! The signal sweeps left → right → left along a sine oscillator:
//!
//! ```text
//! t     = i / sample_rate
//! raw   = sin(2π · pan_speed · t) · pan_depth      ∈ [-depth, depth]
//! p     = (raw + 1) / 2                            ∈ [0, 1]
//! left  *= cos(p · π/2)
//! right *= sin(p · π/2)
//! ```
//!
//! The constant-power law keeps `left_gain² + right_gain² = 1` on every
//! frame, so perceived loudness doesn't dip as the source crosses center.

use orbit_core::{
    Effect, ParamKey, ParameterSet, Result, SampleBuffer, constant_power_gains,
};

/// Sinusoidal stereo auto-panning, the core "8D" spatial effect.
///
/// # Parameters
///
/// - `pan_speed`: 0.01–2.0 Hz (default 0.15), rotation frequency
/// - `pan_depth`: 0.0–1.0 (default 1.0), 0 locks to center, 1 sweeps fully
///
/// # Example
///
/// ```rust
/// use orbit_core::{Effect, ParameterSet, SampleBuffer};
/// use orbit_effects::Rotation;
///
/// let input = SampleBuffer::from_mono(vec![1.0; 44100], 44100).unwrap();
/// let params = ParameterSet::default().with_pan_depth(0.0);
/// let output = Rotation.apply(&input, &params).unwrap();
///
/// // Depth 0 pins the source to center
/// assert!((output.left()[1000] - output.right()[1000]).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Rotation;

impl Rotation {
    /// Per-frame `(left_gain, right_gain)` for a rotation at `speed`/`depth`.
    pub fn gain_at(frame: usize, sample_rate: u32, speed: f32, depth: f32) -> (f64, f64) {
        let t = frame as f64 / f64::from(sample_rate);
        let raw = (core::f64::consts::TAU * f64::from(speed) * t).sin() * f64::from(depth);
        constant_power_gains((raw + 1.0) / 2.0)
    }
}

impl Effect for Rotation {
    fn id(&self) -> &'static str {
        "8d_rotate"
    }

    fn display_name(&self) -> &'static str {
        "8D Rotation"
    }

    fn params(&self) -> &'static [ParamKey] {
        &[ParamKey::PanSpeed, ParamKey::PanDepth]
    }

    fn apply(&self, buffer: &SampleBuffer, params: &ParameterSet) -> Result<SampleBuffer> {
        let speed = params.pan_speed();
        let depth = params.pan_depth();
        let sample_rate = buffer.sample_rate();

        let mut panned = buffer.clone();
        let (left, right) = panned.channels_mut();
        for (i, (l, r)) in left.iter_mut().zip(right.iter_mut()).enumerate() {
            let (left_gain, right_gain) = Self::gain_at(i, sample_rate, speed, depth);
            *l = (f64::from(*l) * left_gain) as f32;
            *r = (f64::from(*r) * right_gain) as f32;
        }

        Ok(panned)
    }
}
