//! Error types for WAV encoding.

use thiserror::Error;

/// Result type for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors that can occur while encoding a buffer.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The audio buffer cannot be represented as a 16-bit PCM WAV file.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Human-readable reason.
        reason: String,
    },

    /// The output sink rejected a write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EncodeError {
    /// Creates an invalid input error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Stable error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            EncodeError::InvalidInput { .. } => "WAV_001",
            EncodeError::Io(_) => "WAV_002",
        }
    }
}
