//! # Roster Client
//!
//! Hiring, dismissal and listing against the [`Roster`] actor.
use crate::model::EmployeeRecord;
use crate::roster_actor::{Roster, RosterError};
use async_trait::async_trait;
use record_actor::{ActorClient, FrameworkError, RecordClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct RosterClient {
    inner: RecordClient<Roster>,
}

impl RosterClient {
    pub fn new(inner: RecordClient<Roster>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Roster> for RosterClient {
    type Error = RosterError;

    fn inner(&self) -> &RecordClient<Roster> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<RosterError>()
            .unwrap_or_else(|e| RosterError::ActorCommunicationError(e.to_string()))
    }
}

impl RosterClient {
    #[instrument(skip(self))]
    pub async fn add_employee(&self, name: &str, id: i64, role: &str) -> Result<(), RosterError> {
        debug!("Sending request");
        self.inner
            .append(EmployeeRecord::new(name, id, role))
            .await
            .map_err(Self::map_error)
    }

    /// Drops every roster line containing `fragment`; returns how many went.
    pub async fn remove_employee(&self, fragment: &str) -> Result<usize, RosterError> {
        self.remove(fragment.to_string()).await
    }

    pub async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, RosterError> {
        self.list().await
    }
}
