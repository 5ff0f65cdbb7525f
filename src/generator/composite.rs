use crate::buffer::SampleBuffer;
use crate::error::SignalResult;
use crate::generator::{validate, Generator};
use crate::timeline::TimeLine;

/*
Composite Generator
===================

Blends two sub-generators into one source:

    out = amplitude_scale * ((1 + cross_fade) * first(f, t)
                           + cross_fade * second(frequency_multiplier * f, t))

With no second generator the second term drops out and the first is simply
boosted by (1 + cross_fade).

NOTE: this is a weighted superposition, NOT a true crossfade. The weights
(1 + cross_fade) and cross_fade do not sum to one, so raising cross_fade
boosts the overall level instead of trading one source against the other.
At cross_fade = 0.5 two full-scale inputs can peak at 2.0. Signals have
been baked against this exact arithmetic, so it stays as-is; run the result
through scale::normalize if you need a bounded range.

The frequency multiplier detunes the second source relative to the first.
Values of 0.5 or 2.0 add sub-octave or octave content; values near 1.0
thicken the tone.
*/

/// Weighted superposition of one or two sub-generators.
pub struct Composite {
    first: Box<dyn Generator>,
    second: Option<Box<dyn Generator>>,
    frequency_multiplier: f32,
    cross_fade: f32,
    amplitude_scale: f32,
}

impl Composite {
    pub fn new(first: Box<dyn Generator>) -> Self {
        Self {
            first,
            second: None,
            frequency_multiplier: 1.0,
            cross_fade: 0.5,
            amplitude_scale: 1.0,
        }
    }

    /// Add a second source, evaluated at `frequency_multiplier * f`.
    pub fn with_second(mut self, second: Box<dyn Generator>) -> Self {
        self.second = Some(second);
        self
    }

    /// Frequency ratio applied to the second source.
    pub fn frequency_multiplier(mut self, multiplier: f32) -> Self {
        self.frequency_multiplier = multiplier;
        self
    }

    /// Blend weight; see the module notes for the exact arithmetic.
    pub fn cross_fade(mut self, cross_fade: f32) -> Self {
        self.cross_fade = cross_fade;
        self
    }

    /// Overall gain applied after blending.
    pub fn amplitude_scale(mut self, scale: f32) -> Self {
        self.amplitude_scale = scale;
        self
    }
}

impl Generator for Composite {
    fn sample(&self, frequency: f32, timeline: &TimeLine) -> SignalResult<SampleBuffer> {
        validate(frequency, timeline)?;

        let first = self.first.sample(frequency, timeline)?;
        let first_weight = 1.0 + self.cross_fade;

        let samples = match &self.second {
            Some(second) => {
                let detuned = second.sample(self.frequency_multiplier * frequency, timeline)?;
                first
                    .iter()
                    .zip(detuned.iter())
                    .map(|(a, b)| self.amplitude_scale * (first_weight * a + self.cross_fade * b))
                    .collect()
            }
            None => first
                .iter()
                .map(|a| self.amplitude_scale * first_weight * a)
                .collect(),
        };

        Ok(SampleBuffer::from_samples(samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AudioConfig;
    use crate::error::SignalError;
    use crate::generator::waveforms::{Saw, Sine};

    fn line(duration: f32) -> TimeLine {
        TimeLine::new(&AudioConfig::new(1000), duration)
    }

    #[test]
    fn single_source_is_boosted_copy() {
        let timeline = line(0.02);
        let plain = Sine.sample(100.0, &timeline).unwrap();

        let composite = Composite::new(Box::new(Sine))
            .cross_fade(0.5)
            .amplitude_scale(2.0);
        let out = composite.sample(100.0, &timeline).unwrap();

        // out = 2.0 * (1 + 0.5) * sine = 3 * sine
        for (p, o) in plain.iter().zip(out.iter()) {
            assert!((o - 3.0 * p).abs() < 1e-6);
        }
    }

    #[test]
    fn two_sources_follow_superposition_arithmetic() {
        let timeline = line(0.02);
        let cross_fade = 0.25;
        let multiplier = 2.0;

        let sine = Sine.sample(100.0, &timeline).unwrap();
        let saw = Saw.sample(multiplier * 100.0, &timeline).unwrap();

        let composite = Composite::new(Box::new(Sine))
            .with_second(Box::new(Saw))
            .frequency_multiplier(multiplier)
            .cross_fade(cross_fade);
        let out = composite.sample(100.0, &timeline).unwrap();

        for ((a, b), o) in sine.iter().zip(saw.iter()).zip(out.iter()) {
            let expected = (1.0 + cross_fade) * a + cross_fade * b;
            assert!((o - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn weights_do_not_sum_to_one() {
        // Two constant unit sources at cross_fade 0.5 come out at 2.0,
        // which is exactly the non-crossfade behavior callers bake against.
        fn unit(f: f32, t: &TimeLine) -> SignalResult<SampleBuffer> {
            validate(f, t)?;
            Ok(SampleBuffer::from_samples(vec![1.0; t.len()]))
        }

        let timeline = line(0.01);
        let composite = Composite::new(Box::new(crate::generator::from_fn(unit)))
            .with_second(Box::new(crate::generator::from_fn(unit)));
        let out = composite.sample(100.0, &timeline).unwrap();

        assert!((out[0] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_bad_parameters() {
        let timeline = line(0.01);
        let composite = Composite::new(Box::new(Sine));

        assert!(matches!(
            composite.sample(0.0, &timeline),
            Err(SignalError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn negative_multiplier_fails_in_second_source() {
        let timeline = line(0.01);
        let composite = Composite::new(Box::new(Sine))
            .with_second(Box::new(Saw))
            .frequency_multiplier(-1.0);

        assert!(matches!(
            composite.sample(440.0, &timeline),
            Err(SignalError::InvalidParameter { .. })
        ));
    }
}
