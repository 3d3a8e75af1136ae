//! The request gateway: one outbound call per invocation, one normalized
//! result back.
//!
//! # Design
//! `execute` is split into three steps. `prepare` turns an
//! `OutboundRequest` into a wire-level `HttpRequest` (URL, query, headers,
//! encoding); the `Transport` performs the round-trip once; and
//! `NormalizedResult::from_response` classifies the outcome. Neither HTTP
//! statuses nor transport failures escape as errors or panics.
//!
//! A gateway holds only an immutable configuration and a transport handle,
//! both behind `Arc`, so clones are cheap and may be used from many threads
//! at once. Gateways built with separate `Gateway::new` calls share nothing.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::GatewayConfig;
use crate::error::ConfigError;
use crate::http::{HttpRequest, RequestBody};
use crate::request::OutboundRequest;
use crate::result::NormalizedResult;
use crate::transport::{HttpTransport, Transport};

#[derive(Clone)]
pub struct Gateway {
    config: Arc<GatewayConfig>,
    transport: Arc<dyn Transport>,
}

impl Gateway {
    /// Gateway with its own `reqwest` connection pool.
    pub fn new(config: GatewayConfig) -> Result<Self, ConfigError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    pub fn with_transport(config: GatewayConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Join `path` onto the base URL. Leading slashes on `path` are ignored;
    /// the path is not otherwise validated.
    pub fn resolve_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url(), path.trim_start_matches('/'))
    }

    /// Build the wire-level request without sending it.
    pub fn prepare(&self, request: OutboundRequest) -> HttpRequest {
        let OutboundRequest {
            method,
            path,
            query,
            body,
            attachments,
        } = request;

        let mut headers = vec![
            ("accept".to_string(), "application/json".to_string()),
            (
                "authorization".to_string(),
                format!("Bearer {}", self.config.credential()),
            ),
        ];

        let body = if !attachments.is_empty() {
            RequestBody::Multipart {
                fields: form_fields(body),
                files: attachments,
            }
        } else if let Some(body) = body {
            headers.push(("content-type".to_string(), "application/json".to_string()));
            RequestBody::Json(body)
        } else {
            RequestBody::Empty
        };

        headers.extend(self.config.extra_headers().iter().cloned());

        HttpRequest {
            method,
            url: self.resolve_url(&path),
            query: query
                .into_iter()
                .map(|(key, value)| (key, value.to_string()))
                .collect(),
            headers,
            body,
        }
    }

    /// Perform the call and classify its outcome.
    pub fn execute(&self, request: OutboundRequest) -> NormalizedResult {
        let prepared = self.prepare(request);
        debug!(method = %prepared.method, url = %prepared.url, "sending request");

        match self.transport.send(&prepared) {
            Ok(response) => {
                let result = NormalizedResult::from_response(&response, &prepared.url);
                if result.ok {
                    debug!(
                        method = %prepared.method,
                        url = %prepared.url,
                        status = response.status,
                        "request succeeded"
                    );
                } else {
                    warn!(
                        method = %prepared.method,
                        url = %prepared.url,
                        status = response.status,
                        reason = %result.message,
                        "request failed"
                    );
                }
                result
            }
            Err(err) => {
                warn!(
                    method = %prepared.method,
                    url = %prepared.url,
                    error = %err,
                    "transport failure"
                );
                NormalizedResult::network_error(&err)
            }
        }
    }
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Flatten a JSON body into multipart text fields. Strings are sent as-is,
/// nulls are skipped and anything else is sent as compact JSON. A body that
/// is not an object travels whole in a field named `body`.
fn form_fields(body: Option<Value>) -> Vec<(String, String)> {
    match body {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Object(map)) => map
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::Null => None,
                Value::String(text) => Some((key, text)),
                other => Some((key, other.to_string())),
            })
            .collect(),
        Some(other) => vec![("body".to_string(), other.to_string())],
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use serde_json::json;
    use tracing_test::traced_test;

    use super::*;
    use crate::error::TransportError;
    use crate::http::{HttpMethod, HttpResponse};
    use crate::request::FileAttachment;
    use crate::result::FailureKind;

    /// Answers every request with the same canned response.
    struct Canned {
        status: u16,
        body: &'static str,
        calls: AtomicUsize,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl Canned {
        fn new(status: u16, body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                status,
                body,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    impl Transport for Arc<Canned> {
        fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(request.clone());
            Ok(HttpResponse::new(self.status, self.body))
        }
    }

    struct Refused;

    impl Transport for Refused {
        fn send(&self, _request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            Err(TransportError::Connect("connection refused".to_string()))
        }
    }

    fn config() -> GatewayConfig {
        GatewayConfig::builder("secret")
            .base_url("https://api.example.com/")
            .header("X-Client", "tests")
            .build()
            .unwrap()
    }

    #[test]
    fn resolve_url_joins_with_single_slash() {
        let gateway = Gateway::with_transport(config(), Refused);
        assert_eq!(
            gateway.resolve_url("/admin/v1/networks/1"),
            "https://api.example.com/admin/v1/networks/1"
        );
        assert_eq!(
            gateway.resolve_url("admin/v1/networks/1"),
            "https://api.example.com/admin/v1/networks/1"
        );
    }

    #[test]
    fn prepare_get_sets_fixed_headers() {
        let gateway = Gateway::with_transport(config(), Refused);
        let prepared = gateway.prepare(OutboundRequest::get("spaces").query("page", 2u32));
        assert_eq!(prepared.method, HttpMethod::Get);
        assert_eq!(prepared.url, "https://api.example.com/spaces");
        assert_eq!(prepared.query, vec![("page".to_string(), "2".to_string())]);
        assert_eq!(prepared.header("accept"), Some("application/json"));
        assert_eq!(prepared.header("authorization"), Some("Bearer secret"));
        assert_eq!(prepared.header("content-type"), None);
        assert_eq!(prepared.header("x-client"), Some("tests"));
        assert_eq!(prepared.body, RequestBody::Empty);
    }

    #[test]
    fn prepare_json_body_sets_content_type() {
        let gateway = Gateway::with_transport(config(), Refused);
        let prepared = gateway.prepare(OutboundRequest::post("tags").json(json!({"name": "a"})));
        assert_eq!(prepared.header("content-type"), Some("application/json"));
        assert_eq!(prepared.body, RequestBody::Json(json!({"name": "a"})));
    }

    #[test]
    fn prepare_attachments_use_multipart() {
        let gateway = Gateway::with_transport(config(), Refused);
        let file = FileAttachment::new("logo.png", vec![1, 2, 3]);
        let prepared = gateway.prepare(
            OutboundRequest::post("assets")
                .json(json!({"asset_type": "image", "size": 3, "skip": null}))
                .attach("file", file.clone()),
        );
        assert_eq!(prepared.header("content-type"), None);
        match prepared.body {
            RequestBody::Multipart { fields, files } => {
                assert_eq!(
                    fields,
                    vec![
                        ("asset_type".to_string(), "image".to_string()),
                        ("size".to_string(), "3".to_string()),
                    ]
                );
                assert_eq!(files, vec![("file".to_string(), file)]);
            }
            other => panic!("expected multipart, got {other:?}"),
        }
    }

    #[test]
    fn non_object_body_travels_as_single_field() {
        assert_eq!(
            form_fields(Some(json!([1, 2]))),
            vec![("body".to_string(), "[1,2]".to_string())]
        );
        assert!(form_fields(None).is_empty());
    }

    #[test]
    fn execute_calls_transport_once() {
        let canned = Canned::new(200, r#"{"items":[{"id":1}]}"#);
        let gateway = Gateway::with_transport(config(), canned.clone());
        let result = gateway.execute(OutboundRequest::get("spaces"));
        assert_eq!(canned.calls.load(Ordering::SeqCst), 1);
        assert_eq!(result, NormalizedResult::success(json!([{"id": 1}])));
    }

    #[test]
    fn execute_does_not_retry_failures() {
        let canned = Canned::new(503, "unavailable");
        let gateway = Gateway::with_transport(config(), canned.clone());
        let result = gateway.execute(OutboundRequest::get("spaces"));
        assert_eq!(canned.calls.load(Ordering::SeqCst), 1);
        assert_eq!(result.message, "Error 503: unavailable");
        assert_eq!(result.failure, Some(FailureKind::Status(503)));
    }

    #[test]
    fn not_found_message_uses_resolved_url() {
        let canned = Canned::new(404, "");
        let gateway = Gateway::with_transport(config(), canned);
        let result = gateway.execute(OutboundRequest::get("/x").query("q", "1"));
        assert_eq!(result.message, "Not found: https://api.example.com/x");
    }

    #[test]
    fn transport_failure_becomes_network_error() {
        let gateway = Gateway::with_transport(config(), Refused);
        let result = gateway.execute(OutboundRequest::delete("spaces/1"));
        assert!(!result.ok);
        assert_eq!(result.data, json!([]));
        assert_eq!(result.message, "Network error: connection refused");
    }

    #[test]
    fn clones_share_transport() {
        let canned = Canned::new(200, "{}");
        let gateway = Gateway::with_transport(config(), canned.clone());
        let clone = gateway.clone();
        gateway.execute(OutboundRequest::get("a"));
        clone.execute(OutboundRequest::get("b"));
        let seen = canned.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].url, "https://api.example.com/b");
    }

    #[test]
    fn debug_does_not_leak_credential() {
        let gateway = Gateway::with_transport(config(), Refused);
        assert!(!format!("{gateway:?}").contains("secret"));
    }

    #[test]
    #[traced_test]
    fn failures_are_logged() {
        let gateway = Gateway::with_transport(config(), Canned::new(401, ""));
        gateway.execute(OutboundRequest::get("me"));
        assert!(logs_contain("request failed"));
        assert!(logs_contain("Unauthorized (401)"));
        assert!(!logs_contain("Bearer secret"));
    }
}
