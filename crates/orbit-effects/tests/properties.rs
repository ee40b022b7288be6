//! Property-based tests for every built-in effect and the two fixed stages.
//!
//! Uses proptest to check the invariants each stage promises: shape
//! preservation, the constant-power pan law, the normalizer ceiling and
//! idempotence, and the warmth ceiling.

use orbit_core::{Effect, ParamKey, ParameterSet, SampleBuffer};
use orbit_effects::{EffectKind, Rotation, StereoWidth, VinylWarmth, normalize, trim};
use proptest::prelude::*;

const SAMPLE_RATE: u32 = 8000;

fn buffer_strategy() -> impl Strategy<Value = SampleBuffer> {
    (1usize..2000).prop_flat_map(|frames| {
        (
            prop::collection::vec(-1.0f32..=1.0, frames),
            prop::collection::vec(-1.0f32..=1.0, frames),
        )
            .prop_map(|(left, right)| SampleBuffer::new(left, right, SAMPLE_RATE).unwrap())
    })
}

/// Random in-range values for every parameter an effect reads.
fn params_from(values: &[f32; 9]) -> ParameterSet {
    let mut params = ParameterSet::default();
    for (key, t) in ParamKey::ALL.into_iter().zip(values) {
        if matches!(key, ParamKey::TrimStart | ParamKey::TrimEnd) {
            continue;
        }
        let desc = key.descriptor();
        params.set(key, desc.min + t * (desc.max - desc.min));
    }
    params
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every built-in effect keeps frame count and sample rate.
    #[test]
    fn effects_preserve_shape(
        buffer in buffer_strategy(),
        values in prop::array::uniform9(0.0f32..=1.0),
        effect_idx in 0usize..4,
    ) {
        let effect = EffectKind::BUILTIN[effect_idx].clone();
        let params = params_from(&values);
        prop_assert!(params.validate().is_ok());

        let output = effect.apply(&buffer, &params).unwrap();
        prop_assert!(output.same_shape(&buffer), "{} changed shape", effect.id());
        prop_assert!(
            output.left().iter().chain(output.right()).all(|s| s.is_finite()),
            "{} produced non-finite output", effect.id()
        );
    }

    /// Rotation gains obey l² + r² = 1 on every frame.
    #[test]
    fn rotation_constant_power(
        frames in 1usize..4000,
        speed in 0.01f32..=2.0,
        depth in 0.0f32..=1.0,
    ) {
        let ones = SampleBuffer::from_mono(vec![1.0; frames], SAMPLE_RATE).unwrap();
        let params = ParameterSet::default().with_pan_speed(speed).with_pan_depth(depth);
        let output = Rotation.apply(&ones, &params).unwrap();
        for (l, r) in output.frames() {
            prop_assert!((l * l + r * r - 1.0).abs() < 1e-5);
        }
    }

    /// At depth 0 both channels of a centered source match.
    #[test]
    fn rotation_zero_depth_centered(mono in prop::collection::vec(-1.0f32..=1.0, 1..2000)) {
        let buffer = SampleBuffer::from_mono(mono, SAMPLE_RATE).unwrap();
        let params = ParameterSet::default().with_pan_depth(0.0);
        let output = Rotation.apply(&buffer, &params).unwrap();
        for (l, r) in output.frames() {
            prop_assert!((l - r).abs() <= 1e-5);
        }
    }

    /// Non-silent input peaks at 0.99 after normalization.
    #[test]
    fn normalize_hits_ceiling(buffer in buffer_strategy()) {
        prop_assume!(buffer.peak() > 1e-6);
        let output = normalize(&buffer);
        prop_assert!((output.peak() - 0.99).abs() < 1e-4);
    }

    /// Normalizing twice is the same as normalizing once.
    #[test]
    fn normalize_idempotent(buffer in buffer_strategy()) {
        let once = normalize(&buffer);
        let twice = normalize(&once);
        for ((a, b), (c, d)) in once.frames().zip(twice.frames()) {
            prop_assert!((a - c).abs() < 1e-5 && (b - d).abs() < 1e-5);
        }
    }

    /// Warmth output never exceeds 0.99.
    #[test]
    fn warmth_ceiling(
        mono in prop::collection::vec(-4.0f32..=4.0, 1..2000),
        warmth in 0.0f32..=1.0,
    ) {
        let buffer = SampleBuffer::from_mono(mono, SAMPLE_RATE).unwrap();
        prop_assume!(warmth > 0.01);
        let params = ParameterSet::default().with_vinyl_warmth(warmth);
        let output = VinylWarmth.apply(&buffer, &params).unwrap();
        prop_assert!(output.peak() <= 0.99 + 1e-6);
    }

    /// Width at or below 0.01 is the identity.
    #[test]
    fn width_identity(buffer in buffer_strategy(), width in 0.0f32..=0.01) {
        let params = ParameterSet::default().with_stereo_width(width);
        prop_assert_eq!(StereoWidth.apply(&buffer, &params).unwrap(), buffer);
    }

    /// Warmth at or below 0.01 is the identity.
    #[test]
    fn warmth_identity(buffer in buffer_strategy(), warmth in 0.0f32..=0.01) {
        let params = ParameterSet::default().with_vinyl_warmth(warmth);
        prop_assert_eq!(VinylWarmth.apply(&buffer, &params).unwrap(), buffer);
    }

    /// Inverted or empty trim windows return the buffer unchanged.
    #[test]
    fn trim_degenerate_is_noop(
        buffer in buffer_strategy(),
        start in 0.0f64..1.0,
        shrink in 0.0f64..1.0,
    ) {
        let end = start * shrink;
        prop_assume!(end > 0.0);
        prop_assert_eq!(trim(&buffer, start, end), buffer);
    }

    /// Trimmed output never grows and keeps the sample rate.
    #[test]
    fn trim_never_grows(buffer in buffer_strategy(), start in 0.0f64..0.5, end in 0.0f64..0.5) {
        let trimmed = trim(&buffer, start, end);
        prop_assert!(trimmed.len() <= buffer.len());
        prop_assert!(!trimmed.is_empty());
        prop_assert_eq!(trimmed.sample_rate(), buffer.sample_rate());
    }
}
