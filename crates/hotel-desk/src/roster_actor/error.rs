//! Error types for the roster store.

use crate::storage::{RecordFormatError, StorageError};
use thiserror::Error;

/// Errors that can occur during roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The employee's name or role cannot be stored as a single token.
    #[error("Invalid employee record: {0}")]
    Format(#[from] RecordFormatError),

    /// The roster file could not be read or written.
    #[error("Roster storage error: {0}")]
    Storage(#[from] StorageError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
