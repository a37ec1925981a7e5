//! Error types for the sync layer.

use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Message recorded when a failure carries no usable text.
pub const GENERIC_ERROR_MESSAGE: &str = "Unable to complete request.";

/// Errors that can occur in sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The outbound request could not be sent or its body not read.
    #[error("network error: {0}")]
    Network(String),

    /// The feed answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The payload did not have the expected shape.
    #[error("mapping error: {0}")]
    Mapping(String),

    /// The simulated remote refused the update.
    #[error("Could not update {name}.")]
    Rejected { name: String },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A background update task could not be scheduled or did not finish.
    #[error("runtime error: {0}")]
    Runtime(String),

    /// A failure with no message of its own.
    #[error("Unable to complete request.")]
    Unknown,
}

impl SyncError {
    /// The human-readable message for this failure, if it carries one.
    ///
    /// Variants wrapping a blank detail string have no message.
    pub fn message(&self) -> Option<String> {
        match self {
            SyncError::Network(detail)
            | SyncError::Mapping(detail)
            | SyncError::Config(detail)
            | SyncError::Runtime(detail)
                if detail.trim().is_empty() =>
            {
                None
            }
            SyncError::Status { message, .. } if message.trim().is_empty() => None,
            other => Some(other.to_string()),
        }
    }

    /// Returns true if this is the simulated remote rejection.
    pub fn is_rejected(&self) -> bool {
        matches!(self, SyncError::Rejected { .. })
    }

    /// Returns the HTTP status if the feed answered with an error status.
    pub fn status(&self) -> Option<u16> {
        match self {
            SyncError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
