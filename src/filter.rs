//! Amplitude modulation.
//!
//! Multiplies a carrier by a modulation signal of equal length. The
//! modulator is made non-negative first - either automatically
//! ([`modulate`]) or by an explicit shift ([`modulate_with_shift`]) -
//! because a modulator that crosses zero flips the carrier's polarity and
//! produces audible pops at the crossings.

use crate::buffer::SampleBuffer;
use crate::error::{SignalError, SignalResult};
use crate::scale;

/// Multiply `carrier` by `modulation`, auto-shifted to non-negative.
pub fn modulate(carrier: &SampleBuffer, modulation: &SampleBuffer) -> SignalResult<SampleBuffer> {
    check_lengths(carrier, modulation)?;
    let shifted = scale::shift_to_non_negative(modulation);
    Ok(multiply(carrier, &shifted))
}

/// Multiply `carrier` by `modulation + shift`.
///
/// The caller picks the shift; nothing guarantees the shifted modulator is
/// non-negative.
pub fn modulate_with_shift(
    carrier: &SampleBuffer,
    modulation: &SampleBuffer,
    shift: f32,
) -> SignalResult<SampleBuffer> {
    check_lengths(carrier, modulation)?;
    let shifted = SampleBuffer::from_samples(modulation.iter().map(|m| m + shift).collect());
    Ok(multiply(carrier, &shifted))
}

fn check_lengths(carrier: &SampleBuffer, modulation: &SampleBuffer) -> SignalResult<()> {
    if carrier.len() != modulation.len() {
        return Err(SignalError::LengthMismatch {
            carrier: carrier.len(),
            modulation: modulation.len(),
        });
    }
    Ok(())
}

fn multiply(a: &SampleBuffer, b: &SampleBuffer) -> SampleBuffer {
    let samples = a.iter().zip(b.iter()).map(|(x, y)| x * y).collect();
    SampleBuffer::from_samples(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulate_shifts_before_multiplying() {
        let carrier = SampleBuffer::from_samples(vec![1.0, 2.0, 3.0]);
        let modulation = SampleBuffer::from_samples(vec![-1.0, 0.0, 1.0]);

        // Shifted modulator is [0, 1, 2].
        let out = modulate(&carrier, &modulation).unwrap();
        assert_eq!(out.as_slice(), &[0.0, 2.0, 6.0]);
    }

    #[test]
    fn explicit_shift_is_added_verbatim() {
        let carrier = SampleBuffer::from_samples(vec![1.0, 1.0, 1.0]);
        let modulation = SampleBuffer::from_samples(vec![-1.0, 0.0, 1.0]);

        let out = modulate_with_shift(&carrier, &modulation, 2.0).unwrap();
        assert_eq!(out.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let carrier = SampleBuffer::from_samples(vec![1.0, 2.0]);
        let modulation = SampleBuffer::from_samples(vec![1.0, 2.0, 3.0]);

        assert_eq!(
            modulate(&carrier, &modulation),
            Err(SignalError::LengthMismatch {
                carrier: 2,
                modulation: 3
            })
        );
    }
}
