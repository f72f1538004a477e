//! Error types for the credential store.

use crate::storage::{RecordFormatError, StorageError};
use thiserror::Error;

/// Errors that can occur while registering or checking managers.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The username or password cannot be stored as a single token.
    #[error("Invalid credential: {0}")]
    Format(#[from] RecordFormatError),

    /// The credential file could not be read or written.
    #[error("Credential storage error: {0}")]
    Storage(#[from] StorageError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
