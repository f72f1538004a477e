//! # Generic Messages
//!
//! Message types exchanged between a `RecordClient` and its `RecordActor`.

use crate::entity::RecordEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants cover the lifecycle every record store shares (append, list, remove)
/// plus an `Action` variant for store-specific logic such as credential checks.
///
/// - **Append**: adds a [`RecordEntity::Record`] at the end of the store.
/// - **List**: reads every record in storage order.
/// - **Remove**: drops the records matched by a [`RecordEntity::Selector`].
/// - **Action**: executes a custom [`RecordEntity::Action`].
#[derive(Debug)]
pub enum RecordRequest<T: RecordEntity> {
    Append {
        record: T::Record,
        respond_to: Response<()>,
    },
    List {
        respond_to: Response<Vec<T::Record>>,
    },
    Remove {
        selector: T::Selector,
        respond_to: Response<usize>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
