//! # RecordEntity Trait
//!
//! The `RecordEntity` trait is the contract every record store (credentials, roster,
//! inventory, …) implements to be served by the generic [`RecordActor`](crate::RecordActor).
//! It names the record type, the selector used for removals, the store's custom
//! actions and its error type, and provides the hooks the actor calls for each request.
//!
//! # Architecture Note
//! The stores in this system hold ordered sequences of records that are appended,
//! listed and removed by content rather than addressed by an id. The trait therefore
//! models a store as a whole (one entity per actor) instead of a keyed collection of
//! entities.
//!
//! A roster store takes an `EmployeeRecord` and cannot be handed a `Credential`:
//! associated types make that mistake a compile error.

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any record store must implement to be managed by a `RecordActor`.
///
/// # Async
/// Hooks are `#[async_trait]` so stores can perform file I/O without blocking the
/// runtime.
#[async_trait]
pub trait RecordEntity: Send + 'static {
    /// One stored record.
    type Record: Clone + Send + Sync + Debug;

    /// Describes which records a removal applies to.
    type Selector: Send + Sync + Debug;

    /// Enum representing store-specific operations (e.g. `Verify`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The error type for this store.
    ///
    /// One error enum per store rather than per operation: clients match on a single
    /// type and the framework can box it into [`FrameworkError::EntityError`](crate::FrameworkError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Adds a record at the end of the store.
    async fn on_append(&mut self, record: Self::Record) -> Result<(), Self::Error>;

    /// Returns every record in storage order.
    async fn on_list(&self) -> Result<Vec<Self::Record>, Self::Error>;

    /// Removes the records matched by `selector` and returns how many were removed.
    ///
    /// Matching nothing is not an error; return `Ok(0)`.
    async fn on_remove(&mut self, selector: Self::Selector) -> Result<usize, Self::Error>;

    /// Handle a custom store-specific action.
    async fn handle_action(&mut self, action: Self::Action)
        -> Result<Self::ActionResult, Self::Error>;
}
