//! Generic lifecycle framework for backend resources.
//!
//! This module provides the building blocks every resource client is made of:
//! a gateway that issues requests, a trait describing the create → resolve → cleanup
//! chain, and a handle that enforces the cleanup guarantee.
//!
//! # Main Components
//!
//! - [`Gateway`] / [`ApiGateway`] - One request in, one response out
//! - [`ResourceLifecycleClient`] - Trait that resource clients implement
//! - [`ResourceHandle`] - Scope-bound record that cleans up on every exit path
//! - [`HarnessError`] - The error taxonomy shared by every step
//!
//! # Testing
//!
//! See [`mock`] module for an in-memory gateway to test clients without a backend.

pub mod error;
pub mod gateway;
pub mod handle;
pub mod lifecycle;
pub mod mock;

// Re-export core types for convenience
pub use error::HarnessError;
pub use gateway::{ApiGateway, ApiRequest, ApiResponse, Gateway};
pub use handle::{InternalId, LifecycleState, ResolvedId, ResourceHandle, UNRESOLVED};
pub use lifecycle::{CreateResult, ResourceLifecycleClient};
