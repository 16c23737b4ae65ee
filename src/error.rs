//! Error types for nomad-ircd.
//!
//! Protocol-level failures (unknown nick, missing parameters, ...) are ordinary
//! numeric replies built by [`crate::reply`]; the types here cover delivery and
//! startup only.

use nomad_proto::ProtocolError;
use thiserror::Error;

pub use crate::config::{ConfigError, ValidationError};

// ============================================================================
// Delivery Errors (mailbox and writer)
// ============================================================================

/// Errors raised while queueing or writing replies.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The recipient's mailbox is at capacity (only from non-waiting sends).
    #[error("delivery queue full")]
    QueueFull,

    /// The recipient's writer has gone away.
    #[error("delivery queue closed")]
    QueueClosed,

    /// No mailbox is registered for the connection.
    #[error("unknown connection: {0}")]
    UnknownConnection(String),

    /// Framing or writing the line failed.
    #[error("write failed: {0}")]
    Write(#[from] ProtocolError),
}

impl DeliveryError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::QueueFull => "queue_full",
            Self::QueueClosed => "queue_closed",
            Self::UnknownConnection(_) => "unknown_connection",
            Self::Write(_) => "write_failed",
        }
    }
}

/// Result type for delivery operations.
pub type DeliveryResult<T = ()> = Result<T, DeliveryError>;
