//! Error types for frame submission.

use thiserror::Error;

/// Errors returned when handing a frame to the modulator.
///
/// Nothing after a successful submission can fail; ticking the sequencer is
/// infallible.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TxError {
    /// Frame is not exactly one protocol frame long. Not retryable.
    #[error("invalid frame length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Frame queue has no free slot right now. Retry after the sequencer drains it.
    #[error("frame queue full ({capacity} frames)")]
    QueueFull { capacity: usize },
}

impl TxError {
    /// Whether the same submission can succeed later without changes.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TxError::QueueFull { .. })
    }

    /// Reason code reported to a host in a negative acknowledgement.
    pub fn code(&self) -> u8 {
        match self {
            TxError::InvalidLength { .. } => 4,
            TxError::QueueFull { .. } => 5,
        }
    }
}

/// Result type alias using TxError.
pub type Result<T> = std::result::Result<T, TxError>;
