//! Thin bindings over the gateway, one module per API resource.
//!
//! Every method builds a path under `admin/v1/networks/{network_id}`, an
//! optional query and body, and calls `Gateway::execute` exactly once.
//! Create methods take an `extra: Fields` map that is merged last, so caller
//! keys override the defaults the method fills in.

pub mod abuse_reports;
pub mod assets;
pub mod badges;
pub mod collections;
pub mod comments;
pub mod custom_fields;
pub mod events;
pub mod invites;
pub mod me;
pub mod members;
pub mod network;
pub mod plans;
pub mod polls;
pub mod posts;
pub mod purchases;
pub mod spaces;
pub mod subscriptions;
pub mod tags;

use serde_json::Value;

use crate::request::{Fields, OutboundRequest};

pub use abuse_reports::AbuseReports;
pub use assets::Assets;
pub use badges::{Badges, NewBadge};
pub use collections::Collections;
pub use comments::Comments;
pub use custom_fields::{CustomFields, NewCustomField};
pub use events::{Events, NewEvent};
pub use invites::{Invites, NewInvite};
pub use me::Me;
pub use members::{MemberUpdate, Members, NewSpaceMember};
pub use network::Networks;
pub use plans::{NewPlan, Plans};
pub use polls::{NewPoll, Polls};
pub use posts::{NewPost, Posts};
pub use purchases::Purchases;
pub use spaces::Spaces;
pub use subscriptions::Subscriptions;
pub use tags::Tags;

/// Page selection for list endpoints that paginate by number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub per_page: u32,
}

impl Page {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    fn apply(self, request: OutboundRequest) -> OutboundRequest {
        request
            .query("page", self.page)
            .query("per_page", self.per_page)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 25,
        }
    }
}

fn network_path(network_id: u64) -> String {
    format!("admin/v1/networks/{network_id}")
}

/// JSON object body under construction.
#[derive(Debug, Default)]
struct Payload(Fields);

impl Payload {
    fn new() -> Self {
        Self::default()
    }

    fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Set `key` only for `Some`. Empty strings and zero are still sent;
    /// callers filter those where the API reads them as unset.
    fn field_opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    /// Add every entry of `extra`, replacing same-named fields.
    fn extend(mut self, extra: Fields) -> Self {
        self.0.extend(extra);
        self
    }

    /// Finish the body with `extra` merged last.
    fn merge(self, extra: Fields) -> Value {
        self.extend(extra).build()
    }

    fn build(self) -> Value {
        Value::Object(self.0)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use crate::config::GatewayConfig;
    use crate::error::TransportError;
    use crate::gateway::Gateway;
    use crate::http::{HttpRequest, HttpResponse};
    use crate::transport::Transport;

    struct Recorder(Mutex<Vec<HttpRequest>>);

    impl Transport for Arc<Recorder> {
        fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.0.lock().unwrap().push(request.clone());
            Ok(HttpResponse::new(200, "{}"))
        }
    }

    /// Run `call` against a recording gateway and return the single request
    /// it sent.
    pub(crate) fn capture(call: impl FnOnce(&Gateway)) -> HttpRequest {
        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
        let config = GatewayConfig::new("token").unwrap();
        let gateway = Gateway::with_transport(config, recorder.clone());
        call(&gateway);
        let mut seen = recorder.0.lock().unwrap();
        assert_eq!(seen.len(), 1, "expected exactly one call");
        seen.remove(0)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn extra_fields_take_precedence() {
        let mut extra = Fields::new();
        extra.insert("role".to_string(), json!("admin"));
        extra.insert("color".to_string(), json!("red"));
        let body = Payload::new()
            .field("name", "x")
            .field("role", "member")
            .merge(extra);
        assert_eq!(body, json!({"name": "x", "role": "admin", "color": "red"}));
    }

    #[test]
    fn optional_fields_are_skipped() {
        let body = Payload::new()
            .field_opt("reason", None::<String>)
            .field_opt("amount", Some(5.0))
            .build();
        assert_eq!(body, json!({"amount": 5.0}));

        let body = Payload::new()
            .field_opt("text", Some(""))
            .field_opt("count", Some(0))
            .build();
        assert_eq!(body, json!({"text": "", "count": 0}));
    }

    #[test]
    fn page_defaults() {
        let request = Page::default().apply(OutboundRequest::get("plans"));
        assert_eq!(request.query.len(), 2);
        assert_eq!(request.query[0].1.to_string(), "1");
        assert_eq!(request.query[1].1.to_string(), "25");
    }
}
