//! # System Lifecycle
//!
//! Starts the three store actors, hands out their clients and shuts them down.
//!
//! ## Startup
//!
//! The stores do not depend on each other, so [`HotelSystem::new`] simply creates
//! each actor from the [`DeskConfig`](crate::config::DeskConfig) and spawns it.
//!
//! ## Shutdown
//!
//! 1. Drop every client held by the system; channels close once no clones remain.
//! 2. Each actor's `recv()` returns `None` and its loop ends.
//! 3. Await the actor tasks, reporting any that panicked.
//!
//! Clones of the clients held elsewhere (a [`Session`](crate::session::Session), a
//! test) keep their actors alive; drop them before calling
//! [`HotelSystem::shutdown`] or it will wait for them.
//!
//! Logging is initialised separately with
//! [`record_actor::tracing::setup_tracing`].

pub mod hotel_system;

pub use hotel_system::*;
