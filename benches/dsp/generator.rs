//! Benchmarks for waveform generators.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use prism_dsp::generator::{Composite, Saw, Sine};
use prism_dsp::{AudioConfig, Generator, TimeLine};

use crate::SIGNAL_LENGTHS;

pub fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/generator");
    let config = AudioConfig::default();

    for &len in SIGNAL_LENGTHS {
        let duration = config.duration_of(len);
        let timeline = TimeLine::new(&config, duration);

        group.bench_with_input(BenchmarkId::new("sine", len), &len, |b, _| {
            b.iter(|| Sine.sample(black_box(440.0), black_box(&timeline)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("saw", len), &len, |b, _| {
            b.iter(|| Saw.sample(black_box(440.0), black_box(&timeline)).unwrap())
        });

        let composite = Composite::new(Box::new(Sine))
            .with_second(Box::new(Saw))
            .frequency_multiplier(0.5);
        group.bench_with_input(BenchmarkId::new("composite", len), &len, |b, _| {
            b.iter(|| {
                composite
                    .sample(black_box(440.0), black_box(&timeline))
                    .unwrap()
            })
        });
    }

    group.finish();
}
