//! Error types for sessions and result stores.

use std::fmt;

/// Errors that can occur while finishing a quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The session has not recorded all 81 swipes yet.
    Incomplete {
        /// Number of items answered so far.
        answered: usize,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete { answered } => {
                write!(f, "quiz incomplete: {answered} of 81 items answered")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Errors surfaced by a result store backend.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    /// The backing store could not be reached or refused the operation.
    Unavailable {
        /// Backend-specific description.
        reason: String,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => {
                write!(f, "result store unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for StoreError {}
