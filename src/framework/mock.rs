//! # Mock Gateway & Testing Guide
//!
//! [`MockGateway`] implements [`Gateway`] entirely in memory. Queue the responses the
//! backend *would* send, run the client logic, then call [`MockGateway::verify`].
//!
//! ## When to use the mock vs a fake backend
//!
//! | Feature | MockGateway | Fake HTTP backend (`tests/`) |
//! |---------|-------------|------------------------------|
//! | **Speed** | Instant (in-memory) | Fast (local socket) |
//! | **Determinism** | 100% deterministic | Deterministic, real HTTP stack |
//! | **State** | None (scripted responses) | Stateful (uniqueness, finished orders) |
//! | **Use Case** | Status/contract mapping in clients | Whole create → resolve → cleanup chains |
//! | **Error Injection** | Easy (`return_err`) | Needs a dedicated mock route |
//!
//! ## Example
//!
//! ```rust
//! use scooter_harness::framework::mock::MockGateway;
//! use scooter_harness::framework::{ApiRequest, Gateway};
//! use serde_json::json;
//!
//! let mock = MockGateway::new();
//! mock.expect_get("/api/v1/orders")
//!     .return_json(200, json!({ "orders": [{ "id": 1 }] }));
//!
//! let response = mock.invoke(&ApiRequest::get("/api/v1/orders")).unwrap();
//! assert_eq!(response.status, 200);
//! mock.verify();
//! ```
//!
//! Unexpected requests never panic inside `invoke` (they may arrive from a cleanup
//! guard while a test is already unwinding). They are answered with a transport error
//! and reported by `verify()`.

use crate::framework::{ApiRequest, ApiResponse, Gateway, HarnessError};
use reqwest::Method;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted exchange: the request we expect and the reply to give.
struct Expectation {
    method: Method,
    path: String,
    response: Result<ApiResponse, HarnessError>,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    calls: Vec<ApiRequest>,
    unexpected: Vec<String>,
}

/// An in-memory gateway with expectation tracking.
///
/// Clones share state, so hand a clone to the client under test and keep one to verify.
#[derive(Clone, Default)]
pub struct MockGateway {
    state: Arc<Mutex<MockState>>,
}

impl MockGateway {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a request with the given method and path (query excluded).
    pub fn expect(&self, method: Method, path: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path: path.into(),
            state: self.state.clone(),
        }
    }

    pub fn expect_get(&self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::GET, path)
    }

    pub fn expect_post(&self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::POST, path)
    }

    pub fn expect_put(&self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::PUT, path)
    }

    pub fn expect_delete(&self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::DELETE, path)
    }

    /// Every request received so far, in order.
    pub fn calls(&self) -> Vec<ApiRequest> {
        lock(&self.state).calls.clone()
    }

    /// Number of received requests matching `method` and `path`.
    pub fn count(&self, method: Method, path: &str) -> usize {
        lock(&self.state)
            .calls
            .iter()
            .filter(|call| call.method == method && call.path == path)
            .count()
    }

    /// Verifies that all expectations were met and nothing unexpected arrived.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.unexpected.is_empty() {
            panic!("Unexpected requests: {:?}", state.unexpected);
        }
        if !state.expectations.is_empty() {
            let remaining: Vec<String> = state
                .expectations
                .iter()
                .map(|e| format!("{} {}", e.method, e.path))
                .collect();
            panic!(
                "Not all expectations were met. {} remaining: {:?}",
                remaining.len(),
                remaining
            );
        }
    }
}

impl Gateway for MockGateway {
    fn invoke(&self, request: &ApiRequest) -> Result<ApiResponse, HarnessError> {
        let mut state = lock(&self.state);
        state.calls.push(request.clone());

        let matches_front = state
            .expectations
            .front()
            .is_some_and(|e| e.method == request.method && e.path == request.path);
        if matches_front {
            if let Some(expectation) = state.expectations.pop_front() {
                return expectation.response;
            }
        }

        let description = format!("{} {}", request.method, request.path);
        state.unexpected.push(description.clone());
        Err(HarnessError::Transport {
            method: request.method.to_string(),
            path: request.path.clone(),
            reason: format!("mock gateway has no expectation for {description}"),
            timed_out: false,
        })
    }
}

/// Builder returned by [`MockGateway::expect`].
pub struct ExpectationBuilder {
    method: Method,
    path: String,
    state: Arc<Mutex<MockState>>,
}

impl ExpectationBuilder {
    /// Replies with a JSON body.
    pub fn return_json(self, status: u16, body: Value) {
        self.push(Ok(ApiResponse::from_json(status, body)));
    }

    /// Replies with a raw (possibly non-JSON) body.
    pub fn return_raw(self, status: u16, raw: impl Into<String>) {
        self.push(Ok(ApiResponse::new(status, raw)));
    }

    /// Fails the call without a response.
    pub fn return_err(self, error: HarnessError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<ApiResponse, HarnessError>) {
        lock(&self.state).expectations.push_back(Expectation {
            method: self.method,
            path: self.path,
            response,
        });
    }
}

fn lock(state: &Mutex<MockState>) -> MutexGuard<'_, MockState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
