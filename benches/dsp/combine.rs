//! Benchmarks for the temporal combine algorithm.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use prism_dsp::{combine, square, AudioConfig, CombineMode, SampleBuffer};

use crate::SIGNAL_LENGTHS;

pub fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/combine");
    let config = AudioConfig::default();

    for &len in SIGNAL_LENGTHS {
        let main = SampleBuffer::from_samples((0..len).map(|i| (i as f32 * 0.1).sin()).collect());
        let second =
            SampleBuffer::from_samples((0..len / 2).map(|i| (i as f32 * 0.15).cos()).collect());

        group.bench_with_input(BenchmarkId::new("add", len), &len, |b, _| {
            b.iter(|| {
                combine(
                    black_box(&config),
                    black_box(&main),
                    black_box(&second),
                    0.0,
                    CombineMode::Add,
                )
                .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("multiply", len), &len, |b, _| {
            b.iter(|| {
                combine(
                    black_box(&config),
                    black_box(&main),
                    black_box(&second),
                    0.0,
                    CombineMode::Multiply,
                )
                .unwrap()
            })
        });

        // Offset overlay exercises the three-region split.
        let offset = config.duration_of(len / 4);
        group.bench_with_input(BenchmarkId::new("add_offset", len), &len, |b, _| {
            b.iter(|| {
                combine(
                    black_box(&config),
                    black_box(&main),
                    black_box(&second),
                    black_box(offset),
                    CombineMode::Add,
                )
                .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("square", len), &len, |b, _| {
            b.iter(|| square(black_box(&main)))
        });
    }

    group.finish();
}
