//! Property-based tests for core types.

use orbit_core::{
    AllpassFilter, CombFilter, OnePole, ParamKey, ParameterSet, SampleBuffer,
    constant_power_gains,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The pan law is constant-power at every position.
    #[test]
    fn pan_law_is_constant_power(position in 0.0f64..=1.0) {
        let (l, r) = constant_power_gains(position);
        prop_assert!((l * l + r * r - 1.0).abs() < 1e-12);
        prop_assert!(l >= -1e-12 && r >= -1e-12);
    }

    /// Interleaving and de-interleaving preserve every sample.
    #[test]
    fn interleave_preserves_samples(
        left in prop::collection::vec(-1.0f32..=1.0, 0..256),
        seed in any::<u32>(),
    ) {
        let right: Vec<f32> = left.iter().map(|s| s * 0.5 + (seed % 7) as f32 * 0.01).collect();
        let buffer = SampleBuffer::new(left, right, 44100).unwrap();
        let rebuilt = SampleBuffer::from_interleaved(&buffer.to_interleaved(), 44100).unwrap();
        prop_assert_eq!(rebuilt, buffer);
    }

    /// A value accepted by its descriptor always validates inside a set.
    #[test]
    fn in_range_values_validate(t in 0.0f32..=1.0, idx in 0usize..7) {
        let key = ParamKey::ALL[idx];
        let desc = key.descriptor();
        let value = desc.min + t * (desc.max - desc.min);
        let mut params = ParameterSet::default();
        params.set(key, value.clamp(desc.min, desc.max));
        prop_assert!(params.validate().is_ok());
    }

    /// Values above the maximum are always rejected and name the key.
    #[test]
    fn out_of_range_values_rejected(excess in 0.001f32..100.0, idx in 0usize..7) {
        let key = ParamKey::ALL[idx];
        let mut params = ParameterSet::default();
        params.set(key, key.descriptor().max + excess);
        let err = params.validate().unwrap_err();
        prop_assert!(err.to_string().contains(key.as_str()));
    }

    /// The RC lowpass never overshoots a bounded input.
    #[test]
    fn one_pole_stays_bounded(
        input in prop::collection::vec(-1.0f64..=1.0, 1..512),
        cutoff in 2000.0f64..20000.0,
    ) {
        let lp = OnePole::new(44100.0, cutoff);
        let mut channel = input;
        lp.filter(&mut channel);
        prop_assert!(channel.iter().all(|y| y.abs() <= 1.0 + 1e-12));
    }

    /// Reverb building blocks stay finite with valid coefficients.
    #[test]
    fn reverb_primitives_finite(
        input in prop::array::uniform32(-1.0f32..=1.0),
        feedback in 0.0f32..0.98,
        damp in 0.0f32..=1.0,
    ) {
        let mut comb = CombFilter::new(37);
        comb.set_feedback(feedback);
        comb.set_damp(damp);
        let mut allpass = AllpassFilter::new(11);
        for _ in 0..8 {
            for &x in &input {
                let y = allpass.process(comb.process(x));
                prop_assert!(y.is_finite());
            }
        }
    }
}
