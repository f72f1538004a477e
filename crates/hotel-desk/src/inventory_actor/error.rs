//! Error types for the inventory client.
//!
//! Inventory operations themselves cannot fail; only delivery to the actor can.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),

    /// The actor answered an action with the result of a different action.
    #[error("Unexpected response to {0}")]
    UnexpectedResponse(&'static str),
}
