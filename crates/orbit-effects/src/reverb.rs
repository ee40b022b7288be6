//! Algorithmic room reverb.
//!
//! A Freeverb-style stereo reverb: 8 parallel damped comb filters feeding
//! 4 series allpass filters per channel. The right channel's delay lines are
//! offset by [`STEREO_SPREAD`] samples so the two tails decorrelate.
//!
//! Gain staging follows the classic Freeverb constants:
//!
//! ```text
//! feedback = room_size · 0.28 + 0.7
//! damp     = damping · 0.4
//! input    = (L + R) · 0.015
//! wet      = wet_level · 3
//! dry      = (1 - wet_level) · 2
//! ```
//!
//! With a stereo width of 1.0 there is no cross-feed, so each output channel
//! is its own tank scaled by `wet / 2 · (1 + width)` plus the dry input.

use orbit_core::{
    AllpassFilter, CombFilter, Effect, Error, ParamKey, ParameterSet, Result, SampleBuffer,
};

/// Freeverb comb filter delay times (at 44.1kHz reference).
/// These are mutually prime to avoid resonances.
const COMB_TUNINGS_44K: [usize; 8] = [1116, 1188, 1277, 1356, 1422, 1491, 1557, 1617];

/// Freeverb allpass filter delay times (at 44.1kHz reference).
const ALLPASS_TUNINGS_44K: [usize; 4] = [556, 441, 341, 225];

/// Extra delay applied to the right channel's filters.
pub const STEREO_SPREAD: usize = 23;

/// Reference sample rate for tuning constants.
const REFERENCE_RATE: u64 = 44100;

const FIXED_GAIN: f32 = 0.015;
const SCALE_WET: f32 = 3.0;
const SCALE_DRY: f32 = 2.0;
const SCALE_DAMP: f32 = 0.4;
const SCALE_ROOM: f32 = 0.28;
const OFFSET_ROOM: f32 = 0.7;
const ALLPASS_FEEDBACK: f32 = 0.5;
const WIDTH: f32 = 1.0;

/// Scale delay times from reference rate to target rate (truncating).
fn scale_to_rate(samples: usize, sample_rate: u32) -> usize {
    (samples as u64 * u64::from(sample_rate) / REFERENCE_RATE) as usize
}

/// One channel's worth of filters.
struct Tank {
    combs: Vec<CombFilter>,
    allpasses: Vec<AllpassFilter>,
}

impl Tank {
    fn new(sample_rate: u32, spread: usize, feedback: f32, damp: f32) -> Self {
        let combs = COMB_TUNINGS_44K
            .iter()
            .map(|&t| {
                let mut comb = CombFilter::new(scale_to_rate(t + spread, sample_rate));
                comb.set_feedback(feedback);
                comb.set_damp(damp);
                comb
            })
            .collect();
        let allpasses = ALLPASS_TUNINGS_44K
            .iter()
            .map(|&t| {
                let mut allpass = AllpassFilter::new(scale_to_rate(t + spread, sample_rate));
                allpass.set_feedback(ALLPASS_FEEDBACK);
                allpass
            })
            .collect();
        Self { combs, allpasses }
    }

    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let mut out: f32 = self.combs.iter_mut().map(|c| c.process(input)).sum();
        for allpass in &mut self.allpasses {
            out = allpass.process(out);
        }
        out
    }
}

/// Stereo room reverb.
///
/// # Parameters
///
/// - `room_size`: 0.0–1.0 (default 0.4), larger rooms ring longer
/// - `wet_level`: 0.0–1.0 (default 0.3), dry level is `1 - wet_level`
/// - `damping`: 0.0–1.0 (default 0.5), high-frequency absorption
///
/// The dry path carries a fixed gain of 2, so at `wet_level = 0` the output
/// is the input doubled. The normalizer at the end of the chain removes
/// the level change.
///
/// # Example
///
/// ```rust
/// use orbit_core::{Effect, ParameterSet, SampleBuffer};
/// use orbit_effects::Reverb;
///
/// let mut impulse = vec![0.0; 8820];
/// impulse[0] = 1.0;
/// let input = SampleBuffer::from_mono(impulse, 44100).unwrap();
/// let output = Reverb.apply(&input, &ParameterSet::default()).unwrap();
///
/// assert_eq!(output.len(), input.len());
/// // Tail energy well after the impulse
/// assert!(output.left()[4000..].iter().any(|s| s.abs() > 1e-6));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Reverb;

impl Effect for Reverb {
    fn id(&self) -> &'static str {
        "reverb"
    }

    fn display_name(&self) -> &'static str {
        "Reverb"
    }

    fn params(&self) -> &'static [ParamKey] {
        &[ParamKey::RoomSize, ParamKey::WetLevel, ParamKey::Damping]
    }

    fn apply(&self, buffer: &SampleBuffer, params: &ParameterSet) -> Result<SampleBuffer> {
        if buffer.is_empty() {
            return Err(Error::processing(self.id(), "buffer has no frames"));
        }

        let sample_rate = buffer.sample_rate();
        let wet_level = params.wet_level();
        let feedback = params.room_size() * SCALE_ROOM + OFFSET_ROOM;
        let damp = params.damping() * SCALE_DAMP;

        let wet = wet_level * SCALE_WET;
        let dry = (1.0 - wet_level) * SCALE_DRY;
        let wet1 = 0.5 * wet * (1.0 + WIDTH);
        let wet2 = 0.5 * wet * (1.0 - WIDTH);

        let mut tank_l = Tank::new(sample_rate, 0, feedback, damp);
        let mut tank_r = Tank::new(sample_rate, STEREO_SPREAD, feedback, damp);

        let mut left = Vec::with_capacity(buffer.len());
        let mut right = Vec::with_capacity(buffer.len());
        for (in_l, in_r) in buffer.frames() {
            let input = (in_l + in_r) * FIXED_GAIN;
            let out_l = tank_l.process(input);
            let out_r = tank_r.process(input);

            left.push(out_l * wet1 + out_r * wet2 + in_l * dry);
            right.push(out_r * wet1 + out_l * wet2 + in_r * dry);
        }

        SampleBuffer::new(left, right, sample_rate)
    }
}
