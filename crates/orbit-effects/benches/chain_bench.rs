//! Criterion benchmarks for the orbit effect chain
//!
//! Run with: cargo bench
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use orbit_core::{Effect, ParameterSet, SampleBuffer};
use orbit_effects::{EffectChain, EffectKind, NoProgress, run_chain};

const SAMPLE_RATE: u32 = 44100;
const DURATIONS_SECS: &[f32] = &[0.5, 2.0, 10.0];

fn generate_test_signal(seconds: f32) -> SampleBuffer {
    let frames = (seconds * SAMPLE_RATE as f32) as usize;
    let mono = (0..frames)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
        })
        .collect();
    SampleBuffer::from_mono(mono, SAMPLE_RATE).unwrap()
}

fn bench_effects(c: &mut Criterion) {
    let input = generate_test_signal(2.0);
    let params = ParameterSet::default();
    let mut group = c.benchmark_group("Effects");

    for effect in EffectKind::BUILTIN {
        group.bench_function(effect.id(), |b| {
            b.iter(|| black_box(effect.apply(black_box(&input), &params).unwrap()))
        });
    }

    group.finish();
}

fn bench_default_chain(c: &mut Criterion) {
    let chain = EffectChain::default();
    let params = ParameterSet::default();
    let mut group = c.benchmark_group("DefaultChain");
    group.sample_size(10);

    for &seconds in DURATIONS_SECS {
        let input = generate_test_signal(seconds);
        group.bench_with_input(BenchmarkId::from_parameter(seconds), &input, |b, input| {
            b.iter(|| black_box(run_chain(black_box(input), &chain, &params, &mut NoProgress).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_effects, bench_default_chain);
criterion_main!(benches);
