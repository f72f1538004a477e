//! Typed clients for the store actors.
//!
//! Each wraps a [`RecordClient`](record_actor::RecordClient), exposes the store's
//! domain operations and maps framework failures back into the store's error type.

pub mod credential_client;
pub mod inventory_client;
pub mod roster_client;

pub use credential_client::*;
pub use inventory_client::*;
pub use roster_client::*;
