//! # Generic Client
//!
//! This module defines the generic client for communicating with record actors.

use crate::entity::RecordEntity;
use crate::error::FrameworkError;
use crate::message::RecordRequest;
use tokio::sync::{mpsc, oneshot};

/// ## RecordClient
///
/// The `RecordClient<T>` forwards requests to a `RecordActor<T>` over a Tokio mpsc
/// channel and awaits the reply on a oneshot channel. It holds only a sender, so
/// cloning is cheap.
pub struct RecordClient<T: RecordEntity> {
    sender: mpsc::Sender<RecordRequest<T>>,
}

// Derive would require `T: Clone`; only the sender is cloned.
impl<T: RecordEntity> Clone for RecordClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: RecordEntity> RecordClient<T> {
    pub fn new(sender: mpsc::Sender<RecordRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn append(&self, record: T::Record) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RecordRequest::Append { record, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T::Record>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RecordRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn remove(&self, selector: T::Selector) -> Result<usize, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RecordRequest::Remove {
                selector,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RecordRequest::Action { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
