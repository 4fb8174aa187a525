//! # API Gateway
//!
//! The lowest layer of the harness: one request in, one response out.
//!
//! - [`ApiRequest`]: method, path, query and an optional JSON body.
//! - [`ApiResponse`]: status code, parsed body and the raw text the backend sent.
//! - [`Gateway`]: the seam the lifecycle clients talk to.
//! - [`ApiGateway`]: the real implementation, a blocking `reqwest` client.
//!
//! The gateway never interprets a status code and never retries. Deciding whether a
//! `404` is a failure or the expected outcome belongs to the caller.

use crate::framework::HarnessError;
use crate::lifecycle::HarnessConfig;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use tracing::{debug, instrument, warn};

/// A single request to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Attaches a typed body. Field presence is decided by the body's `Serialize` impl.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, HarnessError> {
        let value = serde_json::to_value(body)
            .map_err(|e| HarnessError::contract("encode request", e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// What came back from the backend.
///
/// `body` is `Value::Null` when the payload was empty or not JSON; `raw` always holds
/// the text verbatim so failures can be reported exactly as the backend phrased them.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
    pub raw: String,
}

impl ApiResponse {
    pub fn new(status: u16, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let body = serde_json::from_str(&raw).unwrap_or(Value::Null);
        Self { status, body, raw }
    }

    pub fn from_json(status: u16, body: Value) -> Self {
        Self {
            status,
            raw: body.to_string(),
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Top-level field of the JSON body.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }

    /// The backend's human-readable `message` field.
    pub fn message(&self) -> Option<&str> {
        self.field("message").and_then(Value::as_str)
    }

    /// The boolean `ok` field.
    pub fn ok_flag(&self) -> Option<bool> {
        self.field("ok").and_then(Value::as_bool)
    }

    /// Decodes the body into a typed response.
    pub fn json<T: DeserializeOwned>(&self, operation: &'static str) -> Result<T, HarnessError> {
        serde_json::from_value(self.body.clone()).map_err(|e| {
            HarnessError::contract(operation, format!("{e} in response body {}", self.raw))
        })
    }
}

/// Issues exactly one request and reports what happened.
///
/// Implementations must not retry and must not interpret the status code.
/// Transport-level failures (no response at all) are reported as
/// [`HarnessError::Transport`].
pub trait Gateway {
    fn invoke(&self, request: &ApiRequest) -> Result<ApiResponse, HarnessError>;
}

/// Blocking HTTP gateway bound to a single base URL.
#[derive(Debug, Clone)]
pub struct ApiGateway {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl ApiGateway {
    /// Builds a gateway from a validated configuration.
    pub fn new(config: &HarnessConfig) -> Result<Self, HarnessError> {
        config.validate()?;
        let base_url = config.base_url()?;
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(|e| HarnessError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> Result<Url, HarnessError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| HarnessError::Config(format!("invalid request path {path}: {e}")))
    }
}

impl Gateway for ApiGateway {
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    fn invoke(&self, request: &ApiRequest) -> Result<ApiResponse, HarnessError> {
        let url = self.url_for(&request.path)?;
        debug!(query = ?request.query, body = ?request.body, "Sending request");

        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .header(CONTENT_TYPE, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .map_err(|e| transport_error(request, &e))?;
        let status = response.status().as_u16();
        let raw = response
            .text()
            .map_err(|e| transport_error(request, &e))?;

        debug!(status, body = %raw, "Received response");
        Ok(ApiResponse::new(status, raw))
    }
}

fn transport_error(request: &ApiRequest, error: &reqwest::Error) -> HarnessError {
    warn!(error = %error, timed_out = error.is_timeout(), "Transport failure");
    HarnessError::Transport {
        method: request.method.to_string(),
        path: request.path.clone(),
        reason: error.to_string(),
        timed_out: error.is_timeout(),
    }
}
