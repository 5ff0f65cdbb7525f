// Purpose - external interfaces; the core hands finished buffers to these
// sinks and never reads state back.

#[cfg(feature = "rtrb")]
pub mod output;

#[cfg(feature = "rtrb")]
pub use output::{AudioOutput, PlaybackError};
