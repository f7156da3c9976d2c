//! Error types for afterglow-common.

use thiserror::Error;

/// Errors raised while reading from a [`ByteCursor`](crate::ByteCursor).
///
/// Every variant means the input was shorter than the format requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A read would cross the end of the buffer or the declared end offset.
    #[error("unexpected end of input: needed {needed} bytes but only {available} available")]
    UnexpectedEof { needed: usize, available: usize },

    /// The declared end offset lies beyond the buffer.
    #[error("declared end offset {end} exceeds buffer length {len}")]
    EndOutOfBounds { end: usize, len: usize },

    /// A null-terminated string ran to the end of the input.
    #[error("string missing null terminator")]
    MissingNullTerminator,
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
