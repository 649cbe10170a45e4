//! Error types for share-payload operations.

use std::fmt;

/// Result type for share-payload operations.
pub type WireResult<T> = Result<T, WireError>;

/// Errors that can occur while decoding a share token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WireError {
    /// The token did not decode to exactly [`FRAME_LEN`](crate::FRAME_LEN) bytes.
    InvalidPayloadLength {
        /// Number of bytes the token decoded to.
        actual: usize,
    },

    /// The trailing checksum disagrees with one freshly computed over the
    /// frame body. Signals corruption or tampering.
    ChecksumMismatch {
        /// Checksum stored in the frame.
        stored: u16,
        /// Checksum computed over the frame body.
        computed: u16,
    },

    /// The token is not valid URL-safe base64.
    MalformedToken {
        /// Description of the underlying decode failure.
        reason: String,
    },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPayloadLength { actual } => {
                write!(f, "invalid payload length: {actual} bytes, expected 37")
            }
            Self::ChecksumMismatch { stored, computed } => {
                write!(
                    f,
                    "checksum mismatch: stored 0x{stored:04X}, computed 0x{computed:04X}"
                )
            }
            Self::MalformedToken { reason } => {
                write!(f, "failed to decode share token: {reason}")
            }
        }
    }
}

impl std::error::Error for WireError {}
