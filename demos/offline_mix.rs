//! Offline combine walkthrough: bake two sources and overlay them.
//!
//! Run with: cargo run --example offline_mix

use prism_dsp::generator::{Saw, Sine};
use prism_dsp::{combine, scale, AudioConfig, CombineMode, Generator, TimeLine};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = AudioConfig::default();
    let timeline = TimeLine::new(&config, 1.0);

    let low = Sine.sample(432.0, &timeline)?;
    let high = Sine.sample(864.0, &timeline)?;

    // Ring-modulate the two sines, then drop a slow saw onto the second half.
    let modulated = combine(&config, &low, &high, 0.0, CombineMode::Multiply)?;
    let sweep = Saw.sample(2.0, &TimeLine::new(&config, 0.5))?;
    let mixed = combine(&config, &modulated, &sweep, 0.5, CombineMode::Add)?;

    let bounded = scale::amplitude_range(&mixed, -1.0, 1.0)?;
    println!(
        "Rendered {} samples ({:.2}s)",
        bounded.len(),
        bounded.duration(&config)
    );
    Ok(())
}
