use thiserror::Error;

/// Result alias used throughout the crate.
pub type SignalResult<T> = Result<T, SignalError>;

/// Failures produced by signal construction and combination.
///
/// All of these are synchronous, local errors: the operation that detects
/// the problem returns it to its immediate caller and leaves no partial
/// state behind. Nothing here is retried or degraded internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignalError {
    /// A generator was given a non-positive frequency or an empty timeline.
    #[error("invalid generator parameter: {reason}")]
    InvalidParameter { reason: String },

    /// A combine start offset was negative.
    #[error("combine start offset must be non-negative, got {start}s")]
    InvalidArgument { start: f32 },

    /// Amplitude rescaling of a constant signal (max == min).
    #[error("signal amplitude range is zero, cannot rescale")]
    DegenerateSignal,

    /// Modulation requires carrier and modulator of equal length.
    #[error("buffer length mismatch: carrier has {carrier} samples, modulation has {modulation}")]
    LengthMismatch { carrier: usize, modulation: usize },

    /// A tone name not present in the keyboard's frequency table.
    #[error("unknown tone \"{0}\"")]
    UnknownTone(String),

    /// The keyboard was asked to synthesize before a generator was applied.
    #[error("no generator loaded, apply one before synthesizing")]
    NoGeneratorLoaded,
}

impl SignalError {
    pub(crate) fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }
}
