//! Resource-specific clients built on [`ResourceLifecycleClient`](crate::framework::ResourceLifecycleClient).
//!
//! Each client is generic over the [`Gateway`](crate::framework::Gateway) so it runs the
//! same against the live backend, a local fake, or the in-memory mock.

pub mod courier_client;
pub mod order_client;

pub use courier_client::*;
pub use order_client::*;
