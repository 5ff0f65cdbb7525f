use std::f32::consts::TAU;

use crate::buffer::SampleBuffer;
use crate::error::SignalResult;
use crate::generator::{validate, Generator};
use crate::timeline::TimeLine;

/*
Basic Waveforms
===============

Each waveform is evaluated per sample over the timeline:

  Sine      sin(f * 2π * t)            bipolar, [-1, +1]
  Saw       (t * f) mod 1              ramp, [0, 1)
  Parabola  ((t*f mod 1)*(pe-ps)-ps)²  squared ramp over one period
  Clock     phase <= width ? 1 : 0     unipolar pulse train

Saw and parabola are unipolar on purpose - they double as modulation
sources for filter::modulate, where a non-negative shape avoids polarity
flips in the carrier.

Clock computes its phase per sample: phase = (t * f) mod 1 is the position
inside the current period as a fraction, and the output is high while that
fraction is at most `width`. A width of 0.1 gives a 10% duty cycle at any
frequency.
*/

/// Pure sine wave, `sin(f * 2π * t)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sine;

impl Generator for Sine {
    fn sample(&self, frequency: f32, timeline: &TimeLine) -> SignalResult<SampleBuffer> {
        validate(frequency, timeline)?;

        let samples = timeline
            .iter()
            .map(|t| (frequency * TAU * t).sin())
            .collect();
        Ok(SampleBuffer::from_samples(samples))
    }
}

/// Rising sawtooth in `[0, 1)`, `(t * f) mod 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Saw;

impl Generator for Saw {
    fn sample(&self, frequency: f32, timeline: &TimeLine) -> SignalResult<SampleBuffer> {
        validate(frequency, timeline)?;

        let samples = timeline
            .iter()
            .map(|t| (t * frequency).rem_euclid(1.0))
            .collect();
        Ok(SampleBuffer::from_samples(samples))
    }
}

/// Squared ramp over each period.
#[derive(Debug, Clone, Copy)]
pub struct Parabola {
    pub period_start: f32,
    pub period_end: f32,
}

impl Parabola {
    pub fn new(period_start: f32, period_end: f32) -> Self {
        Self {
            period_start,
            period_end,
        }
    }
}

impl Default for Parabola {
    fn default() -> Self {
        Self {
            period_start: 0.0,
            period_end: 1.0,
        }
    }
}

impl Generator for Parabola {
    fn sample(&self, frequency: f32, timeline: &TimeLine) -> SignalResult<SampleBuffer> {
        validate(frequency, timeline)?;

        let span = self.period_end - self.period_start;
        let samples = timeline
            .iter()
            .map(|t| {
                let phase = (t * frequency).rem_euclid(1.0);
                (phase * span - self.period_start).powi(2)
            })
            .collect();
        Ok(SampleBuffer::from_samples(samples))
    }
}

/// Unipolar pulse train with a fractional duty cycle.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    /// High fraction of each period, in `[0, 1]`.
    pub width: f32,
}

impl Clock {
    pub fn new(width: f32) -> Self {
        Self { width }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self { width: 0.1 }
    }
}

impl Generator for Clock {
    fn sample(&self, frequency: f32, timeline: &TimeLine) -> SignalResult<SampleBuffer> {
        validate(frequency, timeline)?;

        let samples = timeline
            .iter()
            .map(|t| {
                let phase = (t * frequency).rem_euclid(1.0);
                if phase <= self.width {
                    1.0
                } else {
                    0.0
                }
            })
            .collect();
        Ok(SampleBuffer::from_samples(samples))
    }
}
