//! prism - terminal piano over the virtual keyboard
//!
//! Run with: cargo run

mod app;
mod ui;

use app::Prism;
use prism_dsp::generator::{self, Saw, Sine};
use prism_dsp::{combine, AudioConfig, CombineMode, Generator, Keyboard};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let config = AudioConfig::default();
    let mut keyboard = Keyboard::new(config);
    keyboard.set_volume(0.2);

    // Sine body ring-modulated by a saw, with a half-frequency saw layered
    // underneath for weight.
    let generator = generator::from_fn(move |f, t| {
        let body = combine(
            &config,
            &Sine.sample(f, t)?,
            &Saw.sample(f, t)?,
            0.0,
            CombineMode::Multiply,
        )?;
        let sub = Saw.sample(0.5 * f, t)?.scaled(0.5);
        combine(&config, &body, &sub, 0.0, CombineMode::Add)
    });

    println!("Baking tone bank...");
    keyboard.apply_generator(Box::new(generator))?;

    Prism::new(keyboard)?.level(4).run()
}
