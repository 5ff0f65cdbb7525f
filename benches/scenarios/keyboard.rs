//! Keyboard tone-bank benchmarks: the one-off bake cost and the per-press
//! synth cost that follows it.

use std::hint::black_box;

use criterion::Criterion;
use prism_dsp::generator::{Composite, Saw, Sine};
use prism_dsp::instrument::SynthOptions;
use prism_dsp::{AudioConfig, Keyboard};

/// Short tones at a reduced rate keep the bake measurable without
/// swamping the run.
fn bench_keyboard_at(rate: u32, tone_duration: f32) -> Keyboard {
    let mut keyboard = Keyboard::new(AudioConfig::new(rate));
    keyboard.set_tone_duration(tone_duration);
    keyboard
}

fn chord_generator() -> Box<Composite> {
    Box::new(
        Composite::new(Box::new(Sine))
            .with_second(Box::new(Saw))
            .frequency_multiplier(0.5),
    )
}

pub fn bench_keyboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/keyboard");

    group.bench_function("bake_bank", |b| {
        b.iter(|| {
            let mut keyboard = bench_keyboard_at(8_000, 0.25);
            keyboard.apply_generator(black_box(chord_generator())).unwrap();
            keyboard
        })
    });

    let mut keyboard = bench_keyboard_at(44_100, 1.0);
    keyboard.apply_generator(chord_generator()).unwrap();

    group.bench_function("synth_chord", |b| {
        b.iter(|| {
            keyboard
                .synth(black_box(&["C4", "E4", "G4", "C5"]))
                .unwrap()
        })
    });

    group.bench_function("synth_truncated", |b| {
        let options = SynthOptions {
            duration: Some(0.1),
            ..SynthOptions::default()
        };
        b.iter(|| keyboard.synth_with(black_box(&["A4"]), options).unwrap())
    });

    group.finish();
}
