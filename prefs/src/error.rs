//! Error types for preference buffer operations.

use std::fmt;

/// Result type for preference codec operations.
pub type PrefsResult<T> = Result<T, PrefsError>;

/// Errors that can occur while decoding a packed preference buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefsError {
    /// The buffer is too short to hold all 81 packed preferences.
    BufferTooShort {
        /// Length of the buffer that was provided.
        actual: usize,
        /// Minimum length required for a full decode.
        required: usize,
    },
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooShort { actual, required } => {
                write!(
                    f,
                    "preference buffer too short: {actual} bytes, need at least {required}"
                )
            }
        }
    }
}

impl std::error::Error for PrefsError {}
