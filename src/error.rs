//! Error types for buffer read operations.

use snafu::Snafu;

/// Error returned when a read cannot be satisfied.
///
/// Writes signal failure through their `bool` return instead; only reads
/// carry an error value.
#[derive(Debug, Snafu, Clone, Copy, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum ReadError {
    /// The read would consume bytes past the end of the buffer.
    #[snafu(display("read out of bounds: needed {needed} bytes, only {available} available"))]
    OutOfBounds {
        /// Bytes the read required.
        needed: usize,
        /// Bytes remaining at the cursor.
        available: usize,
    },

    /// The consumed bytes were not valid UTF-8 text.
    #[snafu(display("text at position {position} is not valid UTF-8"))]
    InvalidText {
        /// Cursor position the text read started at.
        position: usize,
    },
}

/// Result type for buffer read operations.
pub type Result<T> = core::result::Result<T, ReadError>;
