//! Caller-facing description of one API call.

use std::fmt;
use std::path::Path;

use mime::Mime;
use serde_json::{Map, Value};

use crate::error::RequestError;
use crate::http::HttpMethod;

/// Open-ended JSON object used for update payloads and extra fields.
pub type Fields = Map<String, Value>;

/// A scalar query-string value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(n) => write!(f, "{n}"),
            QueryValue::UInt(n) => write!(f, "{n}"),
            QueryValue::Float(n) => write!(f, "{n}"),
            QueryValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(value.into())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::UInt(value.into())
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        QueryValue::UInt(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

/// A file sent as one part of a multipart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    pub file_name: String,
    pub content_type: Mime,
    pub bytes: Vec<u8>,
}

impl FileAttachment {
    /// Attachment sent as `application/octet-stream`.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: mime::APPLICATION_OCTET_STREAM,
            bytes: bytes.into(),
        }
    }

    /// Parse and set the part's content type.
    pub fn with_content_type(self, content_type: &str) -> Result<Self, RequestError> {
        let parsed = content_type
            .parse::<Mime>()
            .map_err(|source| RequestError::InvalidContentType {
                value: content_type.to_string(),
                source,
            })?;
        Ok(self.with_mime(parsed))
    }

    #[must_use]
    pub fn with_mime(mut self, content_type: Mime) -> Self {
        self.content_type = content_type;
        self
    }

    /// Read a file from disk; the part is named after the file.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }
}

/// One outbound call: method, path, optional query, JSON body and files.
///
/// When attachments are present the request is sent as multipart form data
/// and the top-level entries of an object body become text fields;
/// otherwise a body is sent as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, QueryValue)>,
    pub body: Option<Value>,
    pub attachments: Vec<(String, FileAttachment)>,
}

impl OutboundRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            attachments: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Set a query parameter, replacing any earlier value for `key`.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.query.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.query.push((key, value)),
        }
        self
    }

    /// Set a query parameter only when `value` is present.
    #[must_use]
    pub fn query_opt<V: Into<QueryValue>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a file under form field `field`, replacing an earlier one.
    #[must_use]
    pub fn attach(mut self, field: impl Into<String>, file: FileAttachment) -> Self {
        let field = field.into();
        self.attachments.retain(|(existing, _)| *existing != field);
        self.attachments.push((field, file));
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn query_replaces_existing_key() {
        let req = OutboundRequest::get("spaces")
            .query("page", 1u32)
            .query("per_page", 25u32)
            .query("page", 2u32);
        assert_eq!(
            req.query,
            vec![
                ("page".to_string(), QueryValue::UInt(2)),
                ("per_page".to_string(), QueryValue::UInt(25)),
            ]
        );
    }

    #[test]
    fn query_opt_skips_none() {
        let req = OutboundRequest::get("reports")
            .query_opt("status", Some("pending"))
            .query_opt::<u64>("space_id", None);
        assert_eq!(req.query.len(), 1);
        assert_eq!(req.query[0].1.to_string(), "pending");
    }

    #[test]
    fn scalar_display() {
        assert_eq!(QueryValue::from(true).to_string(), "true");
        assert_eq!(QueryValue::from(-3i64).to_string(), "-3");
        assert_eq!(QueryValue::from(2.5).to_string(), "2.5");
    }

    #[test]
    fn builder_sets_body_and_method() {
        let req = OutboundRequest::patch("spaces/1").json(json!({"name": "x"}));
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.body, Some(json!({"name": "x"})));
        assert!(req.attachments.is_empty());
    }

    #[test]
    fn attach_replaces_same_field() {
        let req = OutboundRequest::post("assets")
            .attach("file", FileAttachment::new("a.txt", b"a".to_vec()))
            .attach("file", FileAttachment::new("b.txt", b"b".to_vec()));
        assert_eq!(req.attachments.len(), 1);
        assert_eq!(req.attachments[0].1.file_name, "b.txt");
    }

    #[test]
    fn attachment_defaults_to_octet_stream() {
        let file = FileAttachment::new("logo.png", vec![1, 2, 3]);
        assert_eq!(file.content_type.essence_str(), "application/octet-stream");
        let file = file.with_content_type("image/png").unwrap();
        assert_eq!(file.content_type.essence_str(), "image/png");
    }

    #[test]
    fn malformed_content_type_is_rejected() {
        let err = FileAttachment::new("a.png", vec![1])
            .with_content_type("not a mime")
            .unwrap_err();
        assert!(matches!(
            &err,
            RequestError::InvalidContentType { value, .. } if value == "not a mime"
        ));
        assert!(err.to_string().contains("not a mime"));
    }

    #[test]
    fn content_type_parameters_are_kept() {
        let file = FileAttachment::new("notes.txt", b"hi".to_vec())
            .with_content_type("text/plain; charset=utf-8")
            .unwrap();
        assert_eq!(file.content_type.as_ref(), "text/plain; charset=utf-8");
    }

    #[test]
    fn attachment_from_missing_path_fails() {
        assert!(FileAttachment::from_path("/definitely/not/here.bin").is_err());
    }
}
