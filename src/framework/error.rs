//! # Harness Errors
//!
//! One error type covers every step of a resource lifecycle. The variants map to the
//! stages of the chain (transport, create, resolve, cleanup) so that scenarios can
//! pattern match on *where* a chain broke, not just *that* it broke.

use thiserror::Error;

/// Errors surfaced by the gateway and the lifecycle clients.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HarnessError {
    /// No response was received (connection refused, DNS, TLS, timeout).
    #[error("Transport error on {method} {path}: {reason}")]
    Transport {
        method: String,
        path: String,
        reason: String,
        timed_out: bool,
    },

    /// The backend refused to create the resource.
    ///
    /// `message` is the backend's `message` field, verbatim, so scenarios can
    /// assert on the exact contract text.
    #[error("{resource} creation rejected with {status}: {body}")]
    CreationRejected {
        resource: &'static str,
        status: u16,
        message: Option<String>,
        body: String,
    },

    /// The backend could not map a tracking key to an internal id.
    #[error("{resource} resolution failed with {status}: {body}")]
    ResolutionFailed {
        resource: &'static str,
        status: u16,
        body: String,
    },

    /// A cleanup call did not succeed. Backend state now leaks into later runs.
    #[error("{resource} cleanup failed for id {id} with {status}: {body}")]
    CleanupFailed {
        resource: &'static str,
        id: i64,
        status: u16,
        body: String,
    },

    /// An expected field was absent or malformed, or a required collection was empty.
    #[error("Data contract violation in {operation}: {detail}")]
    DataContractViolation {
        operation: &'static str,
        detail: String,
    },

    /// A call outside the create/resolve/cleanup chain returned an unexpected status.
    #[error("{operation} returned unexpected status {status}: {body}")]
    UnexpectedStatus {
        operation: &'static str,
        status: u16,
        body: String,
    },

    /// The harness configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HarnessError {
    /// HTTP status carried by the error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            HarnessError::CreationRejected { status, .. }
            | HarnessError::ResolutionFailed { status, .. }
            | HarnessError::CleanupFailed { status, .. }
            | HarnessError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend's `message` field for a rejected creation.
    pub fn message(&self) -> Option<&str> {
        match self {
            HarnessError::CreationRejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, HarnessError::Transport { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, HarnessError::Transport { timed_out: true, .. })
    }

    pub(crate) fn contract(operation: &'static str, detail: impl Into<String>) -> Self {
        HarnessError::DataContractViolation {
            operation,
            detail: detail.into(),
        }
    }
}
