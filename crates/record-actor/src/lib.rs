//! # Record Actor
//!
//! Building blocks for record stores that are served by a Tokio actor: one task owns a
//! store, processes requests strictly in order, and hands out cheap cloneable clients.
//!
//! ## Why an actor per store?
//!
//! The stores in this workspace are read-then-overwrite flat files and in-memory
//! sequences. Routing every operation through a single task gives each store
//! sequential semantics (a removal's read and rewrite can never interleave with an
//! append) without a lock, and lets callers hold clients rather than the store itself.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`RecordEntity`]) - the store: its record type, removal
//!    selector, custom actions and error type.
//! 2. **Runtime Layer** ([`RecordActor`]) - message processing loop.
//! 3. **Interface Layer** ([`RecordClient`], [`ActorClient`]) - typed requests and
//!    per-store error mapping.
//!
//! ```rust,ignore
//! let (actor, client) = RecordActor::new(Roster::open(path), 32);
//! tokio::spawn(actor.run());
//!
//! client.append(EmployeeRecord::new("Alice", 1, "Receptionist")).await?;
//! let removed = client.remove("Ali".to_string()).await?;
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient` that answers requests from queued
//! expectations, so client logic can be tested without a running store.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::RecordActor;
pub use client::RecordClient;
pub use client_trait::ActorClient;
pub use entity::RecordEntity;
pub use error::FrameworkError;
pub use message::{RecordRequest, Response};
