//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Every client operation runs inside an `#[instrument]` span, so a log line carries the
//! resource and key it belongs to.
//!
//! ## Configuration
//!
//! Compact format without the module prefix (`with_target(false)`); levels come from
//! `RUST_LOG`.
//!
//! ```bash
//! # Lifecycle transitions only
//! RUST_LOG=info cargo test -- --ignored
//!
//! # Every request and response body
//! RUST_LOG=debug cargo test -- --ignored
//!
//! # Just the gateway
//! RUST_LOG=scooter_harness::framework::gateway=debug cargo test
//! ```
//!
//! ## What Gets Traced
//!
//! | Level | Event |
//! |-------|-------|
//! | `debug` | Outgoing payloads (once, at the entry point) and raw responses |
//! | `info` | `Created`, `Resolved`, `Cleaned up` |
//! | `warn` | Rejected creation, unresolved key, handle dropped before resolving |
//! | `error` | Cleanup failure: the backend now holds state from this run |
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO create: Created resource="courier" key=Credentials { login: Some("gali"), .. } status=201
//! INFO resolve: Resolved resource="courier" id=4021
//! INFO cleanup: Cleaned up resource="courier" id=4021 status=200
//! ```

/// Installs the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // resource="..." fields already say where a line comes from
        .compact()
        .try_init();
}
