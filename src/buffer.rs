use std::ops::Index;

use crate::config::AudioConfig;

/*
Sample Buffers
==============

A SampleBuffer is an ordered, fixed-length run of amplitude samples. The
sample rate is not stored in the buffer; index i corresponds to time
i / sample_rate under whichever AudioConfig produced it.

Buffers behave as immutable values. Every operation in this crate that
transforms a signal (scaling, combining, modulating) returns a fresh buffer
and leaves its inputs untouched, so a buffer handed to the playback sink can
never change underneath it.
*/

/// An ordered sequence of amplitude samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f32>,
}

impl SampleBuffer {
    pub fn from_samples(samples: Vec<f32>) -> Self {
        Self { samples }
    }

    /// A silent buffer of `len` samples.
    pub fn zeros(len: usize) -> Self {
        Self {
            samples: vec![0.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.samples.iter()
    }

    /// Duration in seconds under the given config.
    pub fn duration(&self, config: &AudioConfig) -> f32 {
        config.duration_of(self.samples.len())
    }

    /// A copy with every sample multiplied by `gain`.
    pub fn scaled(&self, gain: f32) -> Self {
        Self {
            samples: self.samples.iter().map(|s| s * gain).collect(),
        }
    }

    /// A copy holding at most the first `len` samples.
    pub fn truncated(&self, len: usize) -> Self {
        Self {
            samples: self.samples[..len.min(self.samples.len())].to_vec(),
        }
    }
}

impl From<Vec<f32>> for SampleBuffer {
    fn from(samples: Vec<f32>) -> Self {
        Self { samples }
    }
}

impl Index<usize> for SampleBuffer {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a SampleBuffer {
    type Item = &'a f32;
    type IntoIter = std::slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
