//! # Generic Actor Server
//!
//! This module defines the `RecordActor`, the server side of a record store. It owns
//! one [`RecordEntity`] and processes requests sequentially, so the store never sees
//! two operations at once and needs no locking.

use crate::client::RecordClient;
use crate::entity::RecordEntity;
use crate::error::FrameworkError;
use crate::message::RecordRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that serves a single record store.
///
/// The actor owns the entity and the receiving end of the channel. Requests are
/// handled one at a time in arrival order, which gives every store the
/// read-then-overwrite consistency it needs without a `Mutex`.
///
/// # Usage Pattern
///
/// 1. **Create**: call `RecordActor::new(entity, buffer)` to get the actor and a client.
/// 2. **Run**: spawn `actor.run()` on the tokio runtime.
/// 3. **Use**: clone the client wherever the store is needed.
///
/// The loop ends once every client has been dropped.
pub struct RecordActor<T: RecordEntity> {
    receiver: mpsc::Receiver<RecordRequest<T>>,
    entity: T,
}

impl<T: RecordEntity> RecordActor<T> {
    /// Creates a new `RecordActor` around `entity` and its associated `RecordClient`.
    ///
    /// # Arguments
    ///
    /// * `entity` - The store the actor will own.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space.
    pub fn new(entity: T, buffer_size: usize) -> (Self, RecordClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, entity };
        let client = RecordClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Just the type name (e.g. "Roster" instead of "hotel_desk::roster_actor::entity::Roster")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RecordRequest::Append { record, respond_to } => {
                    debug!(entity_type, ?record, "Append");
                    match self.entity.on_append(record).await {
                        Ok(()) => {
                            info!(entity_type, "Appended");
                            let _ = respond_to.send(Ok(()));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Append failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                RecordRequest::List { respond_to } => {
                    let result = self
                        .entity
                        .on_list()
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(records) => debug!(entity_type, count = records.len(), "List"),
                        Err(e) => warn!(entity_type, error = %e, "List failed"),
                    }
                    let _ = respond_to.send(result);
                }
                RecordRequest::Remove {
                    selector,
                    respond_to,
                } => {
                    debug!(entity_type, ?selector, "Remove");
                    let result = self
                        .entity
                        .on_remove(selector)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(removed) => info!(entity_type, removed, "Removed"),
                        Err(e) => warn!(entity_type, error = %e, "Remove failed"),
                    }
                    let _ = respond_to.send(result);
                }
                RecordRequest::Action { action, respond_to } => {
                    debug!(entity_type, ?action, "Action");
                    let result = self
                        .entity
                        .handle_action(action)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(entity_type, "Action ok"),
                        Err(e) => warn!(entity_type, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    // --- Store Definition ---

    #[derive(Debug, Default)]
    struct Tally {
        entries: Vec<u32>,
    }

    #[derive(Debug)]
    enum TallyAction {
        Sum,
        Fail,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("tally refused")]
    struct TallyError;

    #[async_trait]
    impl RecordEntity for Tally {
        type Record = u32;
        type Selector = u32;
        type Action = TallyAction;
        type ActionResult = u32;
        type Error = TallyError;

        async fn on_append(&mut self, record: u32) -> Result<(), TallyError> {
            self.entries.push(record);
            Ok(())
        }

        async fn on_list(&self) -> Result<Vec<u32>, TallyError> {
            Ok(self.entries.clone())
        }

        async fn on_remove(&mut self, selector: u32) -> Result<usize, TallyError> {
            let before = self.entries.len();
            self.entries.retain(|entry| *entry != selector);
            Ok(before - self.entries.len())
        }

        async fn handle_action(&mut self, action: TallyAction) -> Result<u32, TallyError> {
            match action {
                TallyAction::Sum => Ok(self.entries.iter().sum()),
                TallyAction::Fail => Err(TallyError),
            }
        }
    }

    // --- Test ---

    #[tokio::test]
    async fn test_record_actor_serves_requests_in_order() {
        let (actor, client) = RecordActor::new(Tally::default(), 10);
        let handle = tokio::spawn(actor.run());

        // 1. Append
        for value in [3, 5, 3, 9] {
            client.append(value).await.unwrap();
        }

        // 2. List preserves insertion order
        assert_eq!(client.list().await.unwrap(), vec![3, 5, 3, 9]);

        // 3. Remove every match
        assert_eq!(client.remove(3).await.unwrap(), 2);
        assert_eq!(client.remove(42).await.unwrap(), 0);

        // 4. Action
        assert_eq!(client.perform_action(TallyAction::Sum).await.unwrap(), 14);

        // 5. Entity errors come back boxed
        let err = client.perform_action(TallyAction::Fail).await.unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));
        assert_eq!(err.to_string(), "Entity error: tally refused");

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = RecordActor::new(Tally::default(), 1);
        drop(actor);

        let err = client.append(1).await.unwrap_err();
        assert!(matches!(err, FrameworkError::ActorClosed));
    }
}
