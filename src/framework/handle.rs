//! # Resource Handles
//!
//! A [`ResourceHandle`] is the harness's local record of one created resource. It is
//! created by [`ResourceLifecycleClient::open`], mutated only through its own methods,
//! and cleans up after itself when it leaves scope.
//!
//! ## Lifecycle
//!
//! ```text
//! open() ──► Created ──resolve()──► Resolved ──cleanup()/drop──► Finished
//!               │                                     └────────► Failed
//!               └── (unresolved) no cleanup possible
//! ```
//!
//! ## Cleanup guarantee
//!
//! - Cleanup is attempted if and only if an internal id was resolved.
//! - It is attempted **exactly once**: either through [`ResourceHandle::cleanup`] or,
//!   failing that, from `Drop` when the scope exits (normal return, `?`, or panic).
//! - A failed cleanup is never swallowed. From `cleanup()` it is returned; from `Drop`
//!   it panics, or, when the thread is already unwinding, is logged at `error` level.

use crate::framework::{ApiResponse, CreateResult, HarnessError, ResourceLifecycleClient};
use serde::Serialize;
use std::fmt::{self, Debug, Display};
use tracing::{error, info, warn};

/// Raw value the backend contract uses for "no id resolved".
pub const UNRESOLVED: i64 = -1;

/// Backend-assigned identifier, only obtainable from a successful resolve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct InternalId(i64);

impl InternalId {
    /// Wraps an id read from a 200-class resolve response.
    pub(crate) fn from_backend(raw: i64, operation: &'static str) -> Result<Self, HarnessError> {
        if raw == UNRESOLVED {
            return Err(HarnessError::contract(
                operation,
                format!("backend returned the sentinel id {UNRESOLVED}"),
            ));
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Display for InternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a resolve step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedId {
    Resolved(InternalId),
    Unresolved,
}

impl ResolvedId {
    pub fn id(self) -> Option<InternalId> {
        match self {
            ResolvedId::Resolved(id) => Some(id),
            ResolvedId::Unresolved => None,
        }
    }

    pub fn is_resolved(self) -> bool {
        matches!(self, ResolvedId::Resolved(_))
    }

    /// The id as the backend contract spells it, `-1` when unresolved.
    pub fn raw(self) -> i64 {
        self.id().map_or(UNRESOLVED, InternalId::get)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Creation succeeded; no internal id yet.
    Created,
    /// Internal id known; cleanup pending.
    Resolved,
    /// Cleanup confirmed by the backend.
    Finished,
    /// Cleanup attempted and refused.
    Failed,
}

/// Scope-bound record of a created resource.
pub struct ResourceHandle<'c, C: ResourceLifecycleClient> {
    client: &'c C,
    spec: C::Spec,
    created: CreateResult<C::Key>,
    resolved: ResolvedId,
    state: LifecycleState,
}

impl<'c, C: ResourceLifecycleClient> ResourceHandle<'c, C> {
    pub(crate) fn new(client: &'c C, spec: C::Spec, created: CreateResult<C::Key>) -> Self {
        info!(resource = C::RESOURCE, key = ?created.key, status = created.status, "Created");
        Self {
            client,
            spec,
            created,
            resolved: ResolvedId::Unresolved,
            state: LifecycleState::Created,
        }
    }

    pub fn spec(&self) -> &C::Spec {
        &self.spec
    }

    pub fn created(&self) -> &CreateResult<C::Key> {
        &self.created
    }

    pub fn key(&self) -> &C::Key {
        &self.created.key
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn internal_id(&self) -> ResolvedId {
        self.resolved
    }

    /// Exchanges the key for an internal id.
    ///
    /// Only the first successful resolution talks to the backend; afterwards the
    /// stored id is returned. An `Unresolved` outcome leaves the handle in `Created`
    /// so the caller may try again.
    pub fn resolve(&mut self) -> Result<ResolvedId, HarnessError> {
        if self.state != LifecycleState::Created {
            return Ok(self.resolved);
        }

        let resolved = self.client.resolve(&self.created.key)?;
        match resolved {
            ResolvedId::Resolved(id) => {
                info!(resource = C::RESOURCE, %id, "Resolved");
                self.resolved = resolved;
                self.state = LifecycleState::Resolved;
            }
            ResolvedId::Unresolved => {
                warn!(resource = C::RESOURCE, key = ?self.created.key, "Unresolved");
            }
        }
        Ok(resolved)
    }

    /// Runs cleanup now instead of at scope exit.
    ///
    /// Returns the backend's confirmation, or `None` when there is nothing to clean up
    /// (never resolved, or cleanup already attempted).
    pub fn cleanup(&mut self) -> Result<Option<ApiResponse>, HarnessError> {
        let id = match (self.state, self.resolved) {
            (LifecycleState::Resolved, ResolvedId::Resolved(id)) => id,
            _ => return Ok(None),
        };

        match self.client.cleanup(id) {
            Ok(response) => {
                info!(resource = C::RESOURCE, %id, status = response.status, "Cleaned up");
                self.state = LifecycleState::Finished;
                Ok(Some(response))
            }
            Err(e) => {
                error!(resource = C::RESOURCE, %id, error = %e, "Cleanup failed");
                self.state = LifecycleState::Failed;
                Err(e)
            }
        }
    }
}

impl<C: ResourceLifecycleClient> Debug for ResourceHandle<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceHandle")
            .field("resource", &C::RESOURCE)
            .field("spec", &self.spec)
            .field("key", &self.created.key)
            .field("resolved", &self.resolved)
            .field("state", &self.state)
            .finish()
    }
}

impl<C: ResourceLifecycleClient> Drop for ResourceHandle<'_, C> {
    fn drop(&mut self) {
        match self.state {
            LifecycleState::Resolved => {
                if let Err(e) = self.cleanup() {
                    if std::thread::panicking() {
                        error!(resource = C::RESOURCE, error = %e, "Cleanup failed while unwinding");
                    } else {
                        panic!("{} cleanup failed: {e}", C::RESOURCE);
                    }
                }
            }
            LifecycleState::Created => {
                warn!(
                    resource = C::RESOURCE,
                    key = ?self.created.key,
                    "Handle dropped unresolved, resource left on backend"
                );
            }
            LifecycleState::Finished | LifecycleState::Failed => {}
        }
    }
}
