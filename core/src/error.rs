//! Error types for the Mighty Networks client.
//!
//! # Design
//! HTTP-level and network-level failures are never errors here: the gateway
//! folds them into a `NormalizedResult`. What remains are defects in the
//! calling code (`ConfigError`, `RequestError`), failures of the wire itself
//! as reported by a `Transport` (`TransportError`, consumed by the gateway),
//! and the typed unwrapping a caller opts into with
//! `NormalizedResult::into_result` or `parse` (`ApiError`).

use thiserror::Error;

use crate::result::FailureKind;

/// Invalid configuration supplied when building a gateway.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The API token was empty or whitespace.
    #[error("API token is required")]
    MissingCredential,

    /// The base URL was empty once trailing slashes were stripped.
    #[error("base URL must not be empty")]
    EmptyBaseUrl,

    /// A zero timeout would fail every request immediately.
    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    /// A timeout read from the environment did not parse.
    #[error("invalid timeout '{value}': expected a whole number of seconds")]
    InvalidTimeout { value: String },

    /// A configured header name or value is not valid HTTP.
    #[error("invalid header '{name}'")]
    InvalidHeader { name: String },

    /// Headers the gateway owns cannot be replaced through configuration.
    #[error("header '{name}' is set by the gateway and cannot be configured")]
    ReservedHeader { name: String },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP transport: {0}")]
    Transport(#[source] reqwest::Error),
}

/// A request that cannot be described as asked, caught before anything is
/// sent.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RequestError {
    #[error("invalid content type '{value}'")]
    InvalidContentType {
        value: String,
        #[source]
        source: mime::FromStrError,
    },
}

/// A failure of the wire itself, before any HTTP status was received.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let cause = cause_chain(&err);
        if err.is_timeout() {
            TransportError::Timeout(cause)
        } else if err.is_connect() {
            TransportError::Connect(cause)
        } else {
            TransportError::Other(cause)
        }
    }
}

/// Flatten an error and its sources into one line, outermost first.
pub(crate) fn cause_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = inner.source();
    }
    out
}

/// Returned when a caller unwraps a `NormalizedResult`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The call itself failed; `message` is the normalized message.
    #[error("{message}")]
    Request { kind: FailureKind, message: String },

    /// The call succeeded but `data` did not have the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Failure classification, if the call itself failed.
    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            ApiError::Request { kind, .. } => Some(*kind),
            ApiError::Decode(_) => None,
        }
    }
}
