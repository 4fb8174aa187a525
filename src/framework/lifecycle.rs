//! # ResourceLifecycleClient Trait
//!
//! The contract every resource-specific client implements: how to **create** the
//! resource, how to **resolve** the public key creation hands back into an internal
//! id, and how to **clean up** by that id.
//!
//! # Architecture Note
//! Orders and couriers follow the same chain with different plumbing:
//!
//! | Step | Order | Courier |
//! |------|-------|---------|
//! | create | `POST /api/v1/orders` → `track` | `POST /api/v1/courier` → `ok` |
//! | key | track number | login + password |
//! | resolve | `GET /api/v1/orders/track` → `id` | `POST /api/v1/courier/login` → `id` |
//! | cleanup | `PUT /api/v1/orders/finish` | `DELETE /api/v1/courier/{id}` |
//!
//! By writing the chain *once* against this trait, the cleanup guarantee lives in a
//! single place: [`ResourceHandle`]. Implementors only describe the three calls.
//!
//! We use associated types (`Spec`, `Key`) so an order payload can never be handed to
//! the courier client, and a track number can never be resolved as a login.

use crate::framework::{ApiResponse, HarnessError, InternalId, ResolvedId, ResourceHandle};
use std::fmt::Debug;

/// What a successful create call returned.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateResult<K> {
    pub status: u16,
    /// The reference to exchange for an internal id.
    pub key: K,
    /// The body's `ok` flag, or `true` when the resource reports none and the
    /// create contract was otherwise met.
    pub ok: bool,
    pub response: ApiResponse,
}

/// A client that owns the create → resolve → cleanup chain of one resource kind.
pub trait ResourceLifecycleClient {
    /// Request body used to create the resource.
    type Spec: Debug;

    /// Public reference that creation yields and resolution consumes.
    type Key: Debug + Clone;

    /// Resource label used in logs and errors.
    const RESOURCE: &'static str;

    /// Creates the resource.
    ///
    /// # Errors
    /// [`HarnessError::CreationRejected`] when the backend refuses, carrying the status
    /// and `message` verbatim. Expected-failure scenarios assert on it.
    fn create(&self, spec: &Self::Spec) -> Result<CreateResult<Self::Key>, HarnessError>;

    /// Exchanges a key for the internal id.
    fn resolve(&self, key: &Self::Key) -> Result<ResolvedId, HarnessError>;

    /// Restores backend state for a resolved resource.
    ///
    /// # Errors
    /// [`HarnessError::CleanupFailed`] whenever the backend does not confirm.
    fn cleanup(&self, id: InternalId) -> Result<ApiResponse, HarnessError>;

    /// Creates the resource and binds it to a scope-owned [`ResourceHandle`].
    ///
    /// Once this returns `Ok`, the handle commits to cleaning up whatever it manages
    /// to resolve, on every exit path of the enclosing scope.
    fn open(&self, spec: Self::Spec) -> Result<ResourceHandle<'_, Self>, HarnessError>
    where
        Self: Sized,
    {
        let created = self.create(&spec)?;
        Ok(ResourceHandle::new(self, spec, created))
    }
}
