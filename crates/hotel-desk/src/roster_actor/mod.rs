//! # Roster Actor
//!
//! Serves the employee roster file: `append` hires, `remove` takes a name fragment,
//! `list` returns the parseable records in file order. The roster has no custom
//! actions.

pub mod entity;
pub mod error;

pub use entity::{parse_roster, Roster};
pub use error::*;

use crate::clients::RosterClient;
use record_actor::RecordActor;
use std::path::PathBuf;

/// Creates a roster actor over the file at `path`, and its client.
pub fn new(path: impl Into<PathBuf>, buffer_size: usize) -> (RecordActor<Roster>, RosterClient) {
    let (actor, generic_client) = RecordActor::new(Roster::open(path), buffer_size);
    (actor, RosterClient::new(generic_client))
}
