use crate::buffer::SampleBuffer;
use crate::config::AudioConfig;
use crate::error::{SignalError, SignalResult};

/*
Temporal Combination
====================

combine() overlays one signal onto another at a start offset given in
seconds, merging the overlapping region element-wise under an arithmetic
mode. The longer input is the "main" signal and fixes the base output
length; the shorter one is the "second" signal that gets placed into it.

    main    |----------------------------|
    second            |---------|
                      ^
                  start offset

    result  |--prefix--|-overlay-|-suffix-|

The main signal is split into at most three regions:

  prefix   [0, start)                   copied through untouched
  overlay  [start, start + second.len)  combined with second per mode
  suffix   the rest                     copied through untouched

Overflow policy: when the second signal extends past main's end
(overflow = main.len - start - second.len < 0), main is zero-padded so the
overlay region exists in full and the output grows to start + second.len.
An offset landing past main's end zero-fills the gap the same way. In every
case:

    output.len() == max(main.len(), start + second.len())

Add can exceed the [-1, +1] range just like any unweighted sum; run the
result through scale::amplitude_range before playback if both inputs are
already near full scale.
*/

/// Arithmetic applied to the overlapping region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineMode {
    Add,
    Multiply,
    Subtract,
}

impl CombineMode {
    /// Binary operator for this mode; first operand is the main signal.
    fn op(self) -> fn(f32, f32) -> f32 {
        match self {
            CombineMode::Add => |main, second| main + second,
            CombineMode::Multiply => |main, second| main * second,
            CombineMode::Subtract => |main, second| main - second,
        }
    }
}

/// Overlay `b` onto `a` (or `a` onto `b`, whichever is longer) starting at
/// `start_seconds`, combining the overlap per `mode`.
///
/// Ties keep `a` as the main signal. Subtract is always main minus second.
/// Fails with [`SignalError::InvalidArgument`] when `start_seconds` is
/// negative.
pub fn combine(
    config: &AudioConfig,
    a: &SampleBuffer,
    b: &SampleBuffer,
    start_seconds: f32,
    mode: CombineMode,
) -> SignalResult<SampleBuffer> {
    if start_seconds < 0.0 {
        return Err(SignalError::InvalidArgument {
            start: start_seconds,
        });
    }

    let start = config.index_for(start_seconds);
    Ok(combine_at(a, b, start, mode))
}

/// Element-wise square of a signal, expressed as self-multiplication at
/// offset zero.
pub fn square(signal: &SampleBuffer) -> SampleBuffer {
    combine_at(signal, signal, 0, CombineMode::Multiply)
}

/// Index-based combine; infallible once the offset is a sample index.
fn combine_at(a: &SampleBuffer, b: &SampleBuffer, start: usize, mode: CombineMode) -> SampleBuffer {
    let (main, second) = if a.len() >= b.len() {
        (a.as_slice(), b.as_slice())
    } else {
        (b.as_slice(), a.as_slice())
    };

    let overlay_end = start + second.len();
    let op = mode.op();

    let mut out = Vec::with_capacity(main.len().max(overlay_end));

    // Prefix: main up to the offset, zero-filled if the offset lands past
    // main's end.
    out.extend_from_slice(&main[..start.min(main.len())]);
    out.resize(start, 0.0);

    // Overlay: combine against main where it exists, against padding zeros
    // where it does not.
    for (i, &s) in second.iter().enumerate() {
        let m = main.get(start + i).copied().unwrap_or(0.0);
        out.push(op(m, s));
    }

    // Suffix: whatever main has left beyond the overlay.
    if overlay_end < main.len() {
        out.extend_from_slice(&main[overlay_end..]);
    }

    SampleBuffer::from_samples(out)
}
