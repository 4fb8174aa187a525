//! Configuration, wiring and observability.
//!
//! This module contains everything a scenario needs before it touches a resource:
//!
//! - **Configuration**: Base URL, timeout and user agent, from code or environment
//! - **Wiring**: One gateway shared by the order and courier clients
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`HarnessConfig`] - Explicit configuration object, no global state
//! - [`Harness`] - Builds the gateway and hands it to every client
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod harness;
pub mod tracing;

pub use config::*;
pub use harness::*;
pub use self::tracing::*;
