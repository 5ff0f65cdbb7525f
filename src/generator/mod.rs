//! Parametric waveform generators.
//!
//! A generator is a pure function from (frequency, timeline) to a sampled
//! waveform of the same length as the timeline. Generators never touch the
//! audio device and never allocate anything but their output buffer, so
//! they can be evaluated anywhere - at load time to bake instrument tones,
//! or on the fly for one-off signals.

/// Weighted superposition of two sub-generators.
pub mod composite;
/// The basic periodic waveforms: sine, saw, parabola, clock.
pub mod waveforms;

use crate::buffer::SampleBuffer;
use crate::error::{SignalError, SignalResult};
use crate::timeline::TimeLine;

pub use composite::Composite;
pub use waveforms::{Clock, Parabola, Saw, Sine};

/// A pure waveform source.
///
/// Implementations map every timeline instant to one amplitude sample, so
/// the output length always equals the timeline length. All built-in
/// generators reject non-positive frequencies and empty timelines with
/// [`SignalError::InvalidParameter`].
pub trait Generator: Send {
    fn sample(&self, frequency: f32, timeline: &TimeLine) -> SignalResult<SampleBuffer>;
}

/// Allow boxed generators to be used as generators (for dynamic dispatch).
impl Generator for Box<dyn Generator> {
    fn sample(&self, frequency: f32, timeline: &TimeLine) -> SignalResult<SampleBuffer> {
        (**self).sample(frequency, timeline)
    }
}

/// Wrap a plain closure as a [`Generator`].
///
/// This keeps ad-hoc compositions expressible without a named type:
///
/// ```ignore
/// let gen = generator::from_fn(|f, t| {
///     let a = Sine.sample(f, t)?;
///     let b = Saw.sample(f, t)?;
///     combine(&config, &a, &b, 0.0, CombineMode::Multiply)
/// });
/// ```
pub fn from_fn<F>(f: F) -> FnGenerator<F>
where
    F: Fn(f32, &TimeLine) -> SignalResult<SampleBuffer> + Send,
{
    FnGenerator(f)
}

/// Adapter returned by [`from_fn`].
pub struct FnGenerator<F>(F);

impl<F> Generator for FnGenerator<F>
where
    F: Fn(f32, &TimeLine) -> SignalResult<SampleBuffer> + Send,
{
    fn sample(&self, frequency: f32, timeline: &TimeLine) -> SignalResult<SampleBuffer> {
        (self.0)(frequency, timeline)
    }
}

/// Shared parameter check for generator entry points.
pub fn validate(frequency: f32, timeline: &TimeLine) -> SignalResult<()> {
    if frequency <= 0.0 {
        return Err(SignalError::invalid_parameter(format!(
            "frequency must be positive, got {frequency} Hz"
        )));
    }
    if timeline.is_empty() {
        return Err(SignalError::invalid_parameter("timeline is empty"));
    }
    Ok(())
}
