use crate::buffer::SampleBuffer;
use crate::config::AudioConfig;

/*
Timelines
=========

A TimeLine is the time axis a generator is evaluated over: an evenly spaced
run of instants in seconds, one per output sample. A 2-second line at
44.1kHz holds 88200 instants from 0.0 to 2.0 inclusive.

Length invariant: a line over `duration` seconds always holds
round(sample_rate * duration) instants. Reconstructing a timeline from a
baked signal (from_signal) therefore round-trips exactly: the rebuilt line
has the same length as the one the signal was generated over.

Start-offset quirk: with_start(config, duration, start) spans from `start`
to `duration` - NOT to `start + duration`. A nonzero start compresses the
instants into the remaining span rather than shifting the whole window.
This matches the behavior downstream callers bake against, so it is kept
as-is; pass start = 0.0 (or use new) for the common uncompressed case.
*/

/// Evenly spaced sample instants in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeLine {
    instants: Vec<f32>,
}

impl TimeLine {
    /// A line from 0 to `duration` seconds inclusive.
    pub fn new(config: &AudioConfig, duration: f32) -> Self {
        Self::with_start(config, duration, 0.0)
    }

    /// A line from `start` to `duration` seconds inclusive.
    ///
    /// The endpoint is `duration`, not `start + duration`; see the module
    /// notes. The length is round(sample_rate * duration) regardless of
    /// `start`.
    pub fn with_start(config: &AudioConfig, duration: f32, start: f32) -> Self {
        let len = config.samples_for(duration);
        Self {
            instants: linspace(start, duration, len),
        }
    }

    /// Reconstruct the timeline a signal was sampled over.
    pub fn from_signal(config: &AudioConfig, signal: &SampleBuffer) -> Self {
        Self::from_signal_at(config, signal, 0.0)
    }

    /// Reconstruct a timeline for `signal` beginning at `start` seconds.
    pub fn from_signal_at(config: &AudioConfig, signal: &SampleBuffer, start: f32) -> Self {
        let duration = config.duration_of(signal.len());
        Self::with_start(config, duration, start)
    }

    /// Wrap explicit instants, mainly useful in tests.
    pub fn from_instants(instants: Vec<f32>) -> Self {
        Self { instants }
    }

    pub fn len(&self) -> usize {
        self.instants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.instants
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.instants.iter()
    }
}

/// Nyquist-derived lower bound on the sample rate for `frequency`.
///
/// Informational only; nothing in the crate enforces it.
pub fn minimum_sample_rate(frequency: f32) -> f32 {
    (2.0 * frequency + 1.0).round()
}

/// `len` evenly spaced values from `start` to `end` inclusive.
fn linspace(start: f32, end: f32, len: usize) -> Vec<f32> {
    match len {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (len - 1) as f32;
            (0..len).map(|i| start + step * i as f32).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_rate_times_duration() {
        let config = AudioConfig::default();
        assert_eq!(TimeLine::new(&config, 1.0).len(), 44_100);
        assert_eq!(TimeLine::new(&config, 0.5).len(), 22_050);
        assert_eq!(TimeLine::new(&config, 2.0).len(), 88_200);
    }

    #[test]
    fn spans_zero_to_duration_inclusive() {
        let config = AudioConfig::new(10);
        let line = TimeLine::new(&config, 1.0);

        assert_eq!(line.len(), 10);
        assert_eq!(line.as_slice()[0], 0.0);
        assert!((line.as_slice()[9] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn instants_are_monotonically_increasing() {
        let config = AudioConfig::new(1000);
        let line = TimeLine::new(&config, 0.25);

        for pair in line.as_slice().windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn start_offset_keeps_duration_endpoint() {
        // The endpoint stays at `duration`, not `start + duration`.
        let config = AudioConfig::new(10);
        let line = TimeLine::with_start(&config, 1.0, 0.5);

        assert_eq!(line.len(), 10);
        assert!((line.as_slice()[0] - 0.5).abs() < 1e-6);
        assert!((line.as_slice()[9] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn from_signal_round_trips_length() {
        let config = AudioConfig::default();
        let line = TimeLine::new(&config, 1.5);
        let signal = SampleBuffer::zeros(line.len());

        let rebuilt = TimeLine::from_signal(&config, &signal);
        assert_eq!(rebuilt.len(), line.len());
        assert_eq!(rebuilt, line);
    }

    #[test]
    fn nyquist_bound_rounds() {
        assert_eq!(minimum_sample_rate(440.0), 881.0);
        assert_eq!(minimum_sample_rate(20.2), 41.0);
    }

    #[test]
    fn zero_duration_gives_empty_line() {
        let config = AudioConfig::default();
        assert!(TimeLine::new(&config, 0.0).is_empty());
    }
}
