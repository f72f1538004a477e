//! # ActorClient Trait
//!
//! Provides a common interface for store-specific clients, adding default `list` and
//! `remove` methods built on top of a generic `RecordClient`.
use crate::{FrameworkError, RecordClient, RecordEntity};
use async_trait::async_trait;

/// Trait for store-specific clients to inherit the standard operations.
///
/// Implementors supply the inner [`RecordClient`] and a mapping from
/// [`FrameworkError`] into their own error type; `list` and `remove` come for free.
///
/// # Example
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<Roster> for RosterClient {
///     type Error = RosterError;
///
///     fn inner(&self) -> &RecordClient<Roster> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         e.into_entity_error::<RosterError>()
///             .unwrap_or_else(|e| RosterError::ActorCommunicationError(e.to_string()))
///     }
/// }
///
/// // list() and remove() are provided automatically
/// let everyone = roster_client.list().await?;
/// ```
#[async_trait]
pub trait ActorClient<T: RecordEntity>: Send + Sync {
    /// The store-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic RecordClient.
    fn inner(&self) -> &RecordClient<T>;

    /// Map framework errors to the specific store error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch every record in storage order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T::Record>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Remove the records matched by `selector`.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, selector: T::Selector) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().remove(selector).await.map_err(Self::map_error)
    }
}
