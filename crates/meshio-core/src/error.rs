//! Error handling for mesh interchange operations.
//!
//! The whole library reports failures through a single message-carrying
//! error kind. A failed read or write aborts outright; there are no partial
//! results and no per-field recovery, so one kind is all that is needed.

use thiserror::Error;

/// Error raised by any mesh read, write, or store operation.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct MeshIoError {
    message: String,
}

impl MeshIoError {
    /// Creates a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for MeshIoError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Type alias for Result with [`MeshIoError`].
///
/// This is the primary return type for mesh interchange operations.
pub type MeshResult<T> = Result<T, MeshIoError>;
