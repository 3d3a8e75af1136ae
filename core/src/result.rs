//! The uniform `{ok, data, message}` value returned for every call.
//!
//! # Design
//! Classification is a pure function of the raw response and the resolved
//! URL, so every row of the status table can be tested without a network.
//! Failures always carry `data = []`; successes carry the normalized body.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, TransportError};
use crate::http::HttpResponse;

pub const SUCCESS_MESSAGE: &str = "success";

/// Why a call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Timeout, DNS, refused connection, TLS or body read failure.
    Network,
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimited,
    /// 422 Unprocessable Entity.
    Validation,
    /// Any other status of 400 or above.
    Status(u16),
}

impl FailureKind {
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            401 => Some(FailureKind::Unauthorized),
            403 => Some(FailureKind::Forbidden),
            404 => Some(FailureKind::NotFound),
            422 => Some(FailureKind::Validation),
            429 => Some(FailureKind::RateLimited),
            s if s >= 400 => Some(FailureKind::Status(s)),
            _ => None,
        }
    }

    /// HTTP status behind the failure; `None` for network failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            FailureKind::Network => None,
            FailureKind::Unauthorized => Some(401),
            FailureKind::Forbidden => Some(403),
            FailureKind::NotFound => Some(404),
            FailureKind::RateLimited => Some(429),
            FailureKind::Validation => Some(422),
            FailureKind::Status(s) => Some(*s),
        }
    }

    /// Whether repeating the same request later may succeed. The gateway
    /// never retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            FailureKind::Network | FailureKind::RateLimited => true,
            FailureKind::Status(s) => *s >= 500,
            _ => false,
        }
    }
}

/// Outcome of one gateway call.
///
/// On success `data` is the value of the body's `items` key when the body is
/// an object that has one, and the parsed body otherwise. A caller therefore
/// cannot tell an empty list page from a bare object without an `items` key
/// by shape alone; resource bindings know which one they asked for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedResult {
    pub ok: bool,
    pub data: Value,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
}

impl NormalizedResult {
    pub fn success(data: Value) -> Self {
        Self {
            ok: true,
            data,
            message: SUCCESS_MESSAGE.to_string(),
            failure: None,
        }
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: Value::Array(Vec::new()),
            message: message.into(),
            failure: Some(kind),
        }
    }

    pub fn network_error(err: &TransportError) -> Self {
        let cause = match err {
            TransportError::Timeout(cause)
            | TransportError::Connect(cause)
            | TransportError::Other(cause) => cause,
        };
        Self::failure(FailureKind::Network, format!("Network error: {cause}"))
    }

    /// Classify a response received for `url`.
    pub fn from_response(response: &HttpResponse, url: &str) -> Self {
        let Some(kind) = FailureKind::from_status(response.status) else {
            return Self::success(normalize_body(&response.body));
        };
        let message = match kind {
            FailureKind::Unauthorized => "Unauthorized (401)".to_string(),
            FailureKind::Forbidden => "Forbidden (403): Access denied".to_string(),
            FailureKind::NotFound => format!("Not found: {url}"),
            FailureKind::RateLimited => "Rate limit exceeded".to_string(),
            FailureKind::Network | FailureKind::Validation | FailureKind::Status(_) => {
                format!("Error {}: {}", response.status, error_detail(&response.body))
            }
        };
        Self::failure(kind, message)
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn into_result(self) -> Result<Value, ApiError> {
        match self.failure {
            None if self.ok => Ok(self.data),
            kind => Err(ApiError::Request {
                kind: kind.unwrap_or(FailureKind::Network),
                message: self.message,
            }),
        }
    }

    /// Deserialize `data` into a domain record.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if !self.ok {
            return Err(ApiError::Request {
                kind: self.failure.unwrap_or(FailureKind::Network),
                message: self.message.clone(),
            });
        }
        Ok(T::deserialize(&self.data)?)
    }
}

/// Parse a success body, unwrapping `items`. Empty or non-JSON bodies
/// become an empty object.
pub fn normalize_body(body: &str) -> Value {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(mut map)) => match map.remove("items") {
            Some(items) => items,
            None => Value::Object(map),
        },
        Ok(other) => other,
        Err(_) => Value::Object(Default::default()),
    }
}

fn error_detail(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(parsed) => parsed.to_string(),
        Err(_) => body.to_string(),
    }
}
