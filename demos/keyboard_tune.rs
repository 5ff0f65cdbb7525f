//! Bake a keyboard tone bank and play a short riff on the default device.
//!
//! Run with: cargo run --example keyboard_tune

use prism_dsp::generator::{self, Saw, Sine};
use prism_dsp::instrument::SynthOptions;
use prism_dsp::io::AudioOutput;
use prism_dsp::{combine, AudioConfig, CombineMode, Generator, Keyboard};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let config = AudioConfig::default();
    let mut keyboard = Keyboard::new(config);
    keyboard.set_volume(0.2);
    keyboard.set_tone_duration(1.0);

    // Sine ring-modulated by a saw at the same pitch.
    let generator = generator::from_fn(move |f, t| {
        combine(
            &config,
            &Sine.sample(f, t)?,
            &Saw.sample(f, t)?,
            0.0,
            CombineMode::Multiply,
        )
    });
    keyboard.apply_generator(Box::new(generator))?;

    let mut output = AudioOutput::new()?;
    let delay = 0.07;
    let level = 4;

    // Each step plays the note doubled an octave row apart.
    let steps: [(char, f32); 8] = [
        ('G', 4.0),
        ('E', 2.0),
        ('G', 4.0),
        ('E', 2.0),
        ('B', 4.0),
        ('B', 4.0),
        ('A', 4.0),
        ('E', 2.0),
    ];

    for _ in 0..3 {
        for (note, beats) in steps {
            let high = format!("{note}{}", level + 2);
            let low = format!("{note}{}", level + 1);
            let options = SynthOptions {
                duration: Some(beats * delay),
                ..SynthOptions::default()
            };

            let signal = keyboard.synth_with(&[high.as_str(), low.as_str()], options)?;
            output.play(&signal, &config, true)?;
        }
    }

    Ok(())
}
