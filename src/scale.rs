//! Amplitude rescaling utilities.
//!
//! These affine-map a signal's amplitude range onto a target interval.
//! They are consumed by generators (taming the composite's unbounded
//! superposition), by the modulation filter (shifting a modulator to
//! non-negative), and by callers preparing buffers for playback.

use crate::buffer::SampleBuffer;
use crate::error::{SignalError, SignalResult};

/// Affine-map the amplitude range of `signal` onto `[lo, hi]`.
///
/// Fails with [`SignalError::DegenerateSignal`] when the signal is constant
/// (max == min), since the mapping would divide by zero.
pub fn amplitude_range(signal: &SampleBuffer, lo: f32, hi: f32) -> SignalResult<SampleBuffer> {
    let (sig_min, sig_max) = min_max(signal);
    if sig_max == sig_min {
        return Err(SignalError::DegenerateSignal);
    }

    let scale = (hi - lo) / (sig_max - sig_min);
    let samples = signal.iter().map(|s| (s - sig_min) * scale + lo).collect();
    Ok(SampleBuffer::from_samples(samples))
}

/// Map the amplitude range onto `[0, 1]`.
pub fn normalize(signal: &SampleBuffer) -> SignalResult<SampleBuffer> {
    amplitude_range(signal, 0.0, 1.0)
}

/// Shift the signal so its minimum sits at zero.
pub fn shift_to_non_negative(signal: &SampleBuffer) -> SampleBuffer {
    let (sig_min, _) = min_max(signal);
    let samples = signal.iter().map(|s| s - sig_min).collect();
    SampleBuffer::from_samples(samples)
}

fn min_max(signal: &SampleBuffer) -> (f32, f32) {
    signal.iter().fold((f32::MAX, f32::MIN), |(lo, hi), &s| {
        (lo.min(s), hi.max(s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_maps_onto_unit_interval() {
        let signal = SampleBuffer::from_samples(vec![-2.0, 0.0, 6.0]);
        let out = normalize(&signal).unwrap();

        assert_eq!(out.as_slice(), &[0.0, 0.25, 1.0]);
    }

    #[test]
    fn normalize_of_constant_signal_is_degenerate() {
        let signal = SampleBuffer::from_samples(vec![0.7, 0.7, 0.7]);
        assert_eq!(normalize(&signal), Err(SignalError::DegenerateSignal));
    }

    #[test]
    fn amplitude_range_hits_requested_bounds() {
        let signal = SampleBuffer::from_samples(vec![-1.0, 0.0, 1.0]);
        let out = amplitude_range(&signal, -0.5, 0.5).unwrap();

        assert_eq!(out.as_slice(), &[-0.5, 0.0, 0.5]);
    }

    #[test]
    fn shift_to_non_negative_zeroes_the_minimum() {
        let signal = SampleBuffer::from_samples(vec![-0.25, 0.5, -1.0]);
        let out = shift_to_non_negative(&signal);

        assert_eq!(out.as_slice(), &[0.75, 1.5, 0.0]);
        assert!(out.iter().all(|&s| s >= 0.0));
    }

    #[test]
    fn shift_of_non_negative_signal_rests_on_zero() {
        let signal = SampleBuffer::from_samples(vec![1.0, 3.0, 2.0]);
        let out = shift_to_non_negative(&signal);

        assert_eq!(out.as_slice(), &[0.0, 2.0, 1.0]);
    }
}
