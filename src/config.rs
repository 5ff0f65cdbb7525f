#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::DEFAULT_SAMPLE_RATE;

/*
Audio Configuration
===================

Every conversion between wall-clock time and sample indices depends on the
sample rate. Rather than keeping the rate in shared global state, it lives in
a small copyable config that is passed explicitly to every call that needs
it. Two buffers produced under different configs simply have different
lengths; there is no hidden coupling.

Rounding convention: seconds-to-samples conversions round to the nearest
sample. A 1-second line at 44.1kHz has exactly 44100 samples; a combine
offset of 0.5s lands on sample 22050.
*/

/// Sample-rate context for time/index conversions.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioConfig {
    /// Samples per second.
    pub sample_rate: u32,
}

impl AudioConfig {
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Number of samples spanning `seconds` of signal, rounded to nearest.
    #[inline]
    pub fn samples_for(&self, seconds: f32) -> usize {
        (self.sample_rate as f32 * seconds).round() as usize
    }

    /// Sample index corresponding to an instant `seconds` into a signal.
    #[inline]
    pub fn index_for(&self, seconds: f32) -> usize {
        self.samples_for(seconds)
    }

    /// Duration in seconds of a buffer holding `len` samples.
    #[inline]
    pub fn duration_of(&self, len: usize) -> f32 {
        len as f32 / self.sample_rate as f32
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}
