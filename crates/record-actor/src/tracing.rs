//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing` subscriber shared by every binary in the
//! workspace.
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//!   (nothing but errors is shown when it is unset)
//! - **Compact format** without module paths; actors log an `entity_type` field instead
//! - **stderr output** so interactive prompts on stdout are never interleaved with logs
//!
//! ```bash
//! RUST_LOG=info cargo run      # request outcomes
//! RUST_LOG=debug cargo run     # full payloads (passwords are redacted)
//! ```

/// Initializes the tracing/logging infrastructure for the application.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
