//! Transport configuration shared by a gateway and every resource binding.
//!
//! # Design
//! `GatewayConfig` is validated once, at construction, and is immutable
//! afterwards. A missing token or a zero timeout is a defect in the calling
//! code, so it fails here with a `ConfigError` instead of surfacing later as
//! a failed request.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};

use crate::error::ConfigError;

/// Production host of the upstream API.
pub const DEFAULT_BASE_URL: &str = "https://api.mn.co";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent string for outbound requests.
pub const DEFAULT_USER_AGENT: &str = concat!("mighty-core/", env!("CARGO_PKG_VERSION"));

pub const ENV_API_TOKEN: &str = "MIGHTY_NETWORKS_API_TOKEN";
pub const ENV_BASE_URL: &str = "MIGHTY_NETWORKS_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "MIGHTY_NETWORKS_TIMEOUT_SECS";

/// Headers the gateway sets itself on every request.
const RESERVED_HEADERS: [&str; 3] = ["authorization", "accept", "content-type"];

/// Immutable base URL, credential, timeout and header set.
#[derive(Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    base_url: String,
    credential: String,
    timeout: Duration,
    user_agent: String,
    extra_headers: Vec<(String, String)>,
}

impl GatewayConfig {
    /// Configuration with the default base URL and timeout.
    pub fn new(credential: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder(credential).build()
    }

    pub fn builder(credential: impl Into<String>) -> GatewayConfigBuilder {
        GatewayConfigBuilder::new(credential)
    }

    /// Read configuration from the process environment.
    ///
    /// `MIGHTY_NETWORKS_API_TOKEN` is required; `MIGHTY_NETWORKS_BASE_URL`
    /// and `MIGHTY_NETWORKS_TIMEOUT_SECS` fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GatewayConfig::from_env`], reading keys through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder(lookup(ENV_API_TOKEN).unwrap_or_default());
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            builder = builder.base_url(base_url);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout { value: raw.clone() })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Additional headers sent on every request, in configuration order.
    pub fn extra_headers(&self) -> &[(String, String)] {
        &self.extra_headers
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url)
            .field("credential", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("extra_headers", &self.extra_headers)
            .finish()
    }
}

/// Builder for [`GatewayConfig`]; validation happens in [`build`](Self::build).
#[derive(Clone)]
pub struct GatewayConfigBuilder {
    base_url: String,
    credential: String,
    timeout: Duration,
    user_agent: String,
    extra_headers: Vec<(String, String)>,
}

impl GatewayConfigBuilder {
    fn new(credential: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credential: credential.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            extra_headers: Vec::new(),
        }
    }

    /// Trailing slashes are stripped.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a header sent on every request. A repeated name replaces the
    /// earlier value.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.extra_headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        self.extra_headers.push((name, value.into()));
        self
    }

    pub fn build(self) -> Result<GatewayConfig, ConfigError> {
        if self.credential.trim().is_empty() {
            return Err(ConfigError::MissingCredential);
        }
        let base_url = self.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        if HeaderValue::from_str(&self.user_agent).is_err() {
            return Err(ConfigError::InvalidHeader {
                name: "User-Agent".to_string(),
            });
        }
        for (name, value) in &self.extra_headers {
            validate_header(name, value)?;
        }

        Ok(GatewayConfig {
            base_url,
            credential: self.credential,
            timeout: self.timeout,
            user_agent: self.user_agent,
            extra_headers: self.extra_headers,
        })
    }
}

fn validate_header(name: &str, value: &str) -> Result<(), ConfigError> {
    let parsed = HeaderName::from_bytes(name.as_bytes()).map_err(|_| ConfigError::InvalidHeader {
        name: name.to_string(),
    })?;
    if RESERVED_HEADERS.contains(&parsed.as_str()) {
        return Err(ConfigError::ReservedHeader {
            name: name.to_string(),
        });
    }
    HeaderValue::from_str(value).map_err(|_| ConfigError::InvalidHeader {
        name: name.to_string(),
    })?;
    Ok(())
}
