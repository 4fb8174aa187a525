//! Typed request and response bodies (DTOs) for the backend's JSON API.

pub mod courier;
pub mod messages;
pub mod order;

pub use courier::*;
pub use order::*;
