//! # Harness Configuration
//!
//! One explicit configuration object, handed to [`Harness::connect`](crate::lifecycle::Harness::connect)
//! or [`ApiGateway::new`](crate::framework::ApiGateway::new). There is no process-wide base
//! URL: two harnesses in the same process can target different backends.

use crate::framework::HarnessError;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://qa-scooter.praktikum-services.ru/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_USER_AGENT: &str = concat!("scooter-harness/", env!("CARGO_PKG_VERSION"));

pub const ENV_BASE_URL: &str = "SCOOTER_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "SCOOTER_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "SCOOTER_USER_AGENT";

/// Where the backend lives and how long to wait for it.
///
/// # Examples
///
/// ```rust
/// use scooter_harness::lifecycle::HarnessConfig;
///
/// let config = HarnessConfig::new("http://localhost:8080");
/// assert_eq!(config.timeout_secs, 5);
/// assert_eq!(config.base_url().unwrap().as_str(), "http://localhost:8080/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Origin every request path is joined onto
    pub base_url: String,

    /// Per-request timeout; expiry is reported as a transport error
    pub timeout_secs: u64,

    pub user_agent: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HarnessConfig {
    /// Defaults, pointed at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Defaults overlaid with `SCOOTER_BASE_URL`, `SCOOTER_TIMEOUT_SECS` and
    /// `SCOOTER_USER_AGENT`.
    pub fn from_env() -> Result<Self, HarnessError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HarnessError> {
        let mut config = Self::default();
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = raw.trim().parse().map_err(|e| {
                HarnessError::Config(format!("{ENV_TIMEOUT_SECS}={raw:?} is not a number: {e}"))
            })?;
        }
        if let Some(user_agent) = lookup(ENV_USER_AGENT) {
            config.user_agent = user_agent;
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Rejects configurations the gateway cannot work with.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.timeout_secs == 0 {
            return Err(HarnessError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        self.base_url().map(|_| ())
    }

    /// The parsed base URL, always ending in `/` so relative paths join below it.
    pub fn base_url(&self) -> Result<Url, HarnessError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            HarnessError::Config(format!("invalid base_url {:?}: {e}", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(HarnessError::Config(format!(
                "base_url {:?} must use http or https",
                self.base_url
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}
