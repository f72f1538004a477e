//! # Credential Actor
//!
//! Serves the manager credential file. Managers register with `append` and sign in
//! with the [`CredentialAction::Verify`] action; credentials are never removed.
//!
//! - [`entity`] - [`RecordEntity`](record_actor::RecordEntity) implementation for [`CredentialStore`]
//! - [`error`] - [`CredentialError`]
//! - [`actions`] - [`CredentialAction`] and [`CredentialActionResult`]

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::CredentialStore;
pub use error::*;

use crate::clients::CredentialClient;
use record_actor::RecordActor;
use std::path::PathBuf;

/// Creates a credential actor over the file at `path`, and its client.
pub fn new(path: impl Into<PathBuf>, buffer_size: usize) -> (RecordActor<CredentialStore>, CredentialClient) {
    let (actor, generic_client) = RecordActor::new(CredentialStore::open(path), buffer_size);
    (actor, CredentialClient::new(generic_client))
}
