//! Posts published in spaces.

use serde_json::Value;

use super::{network_path, Payload};
use crate::gateway::Gateway;
use crate::request::{Fields, OutboundRequest};
use crate::result::NormalizedResult;

pub struct Posts<'a> {
    gateway: &'a Gateway,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub space_id: u64,
    pub title: String,
    pub description: String,
    pub post_type: String,
    /// Ask the upstream to notify space members.
    pub notify: bool,
}

impl<'a> Posts<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Posts in one space.
    pub fn list(&self, network_id: u64, space_id: u64) -> NormalizedResult {
        self.gateway.execute(
            OutboundRequest::get(posts_path(network_id)).query("space_id", space_id),
        )
    }

    pub fn get(&self, network_id: u64, post_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::get(post_path(network_id, post_id)))
    }

    pub fn create(&self, network_id: u64, post: &NewPost, extra: Fields) -> NormalizedResult {
        let body = Payload::new()
            .field("title", post.title.as_str())
            .field("description", post.description.as_str())
            .field("post_type", post.post_type.as_str())
            .field("space_id", post.space_id)
            .merge(extra);
        let mut request = OutboundRequest::post(posts_path(network_id)).json(body);
        if post.notify {
            request = request.query("notify", true);
        }
        self.gateway.execute(request)
    }

    pub fn update(&self, network_id: u64, post_id: u64, fields: Fields) -> NormalizedResult {
        self.gateway.execute(
            OutboundRequest::patch(post_path(network_id, post_id)).json(fields.into()),
        )
    }

    /// Pin or unpin a post.
    pub fn pin(&self, network_id: u64, post_id: u64, pinned: bool) -> NormalizedResult {
        let mut fields = Fields::new();
        fields.insert("is_pinned".to_string(), Value::Bool(pinned));
        self.update(network_id, post_id, fields)
    }

    pub fn delete(&self, network_id: u64, post_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::delete(post_path(network_id, post_id)))
    }

    /// Stop notifications about this post for `user_id`.
    pub fn mute(&self, network_id: u64, post_id: u64, user_id: u64) -> NormalizedResult {
        self.gateway.execute(
            OutboundRequest::post(mute_path(network_id, post_id)).query("user_id", user_id),
        )
    }

    pub fn unmute(&self, network_id: u64, post_id: u64, user_id: u64) -> NormalizedResult {
        self.gateway.execute(
            OutboundRequest::delete(mute_path(network_id, post_id)).query("user_id", user_id),
        )
    }
}

fn posts_path(network_id: u64) -> String {
    format!("{}/posts", network_path(network_id))
}

fn post_path(network_id: u64, post_id: u64) -> String {
    format!("{}/posts/{post_id}", network_path(network_id))
}

fn mute_path(network_id: u64, post_id: u64) -> String {
    format!("{}/mute", post_path(network_id, post_id))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::http::{HttpMethod, RequestBody};
    use crate::resources::testing::capture;

    fn welcome(notify: bool) -> NewPost {
        NewPost {
            space_id: 67890,
            title: "Welcome to the Community!".to_string(),
            description: "Hello everyone".to_string(),
            post_type: "article".to_string(),
            notify,
        }
    }

    #[test]
    fn create_with_notify_sets_query_flag() {
        let mut extra = Fields::new();
        extra.insert("is_pinned".to_string(), json!(true));
        let req = capture(|gw| {
            Posts::new(gw).create(12345, &welcome(true), extra);
        });
        assert_eq!(req.query, vec![("notify".to_string(), "true".to_string())]);
        assert_eq!(
            req.body,
            RequestBody::Json(json!({
                "title": "Welcome to the Community!",
                "description": "Hello everyone",
                "post_type": "article",
                "space_id": 67890,
                "is_pinned": true
            }))
        );
    }

    #[test]
    fn create_without_notify_has_no_query() {
        let req = capture(|gw| {
            Posts::new(gw).create(12345, &welcome(false), Fields::new());
        });
        assert!(req.query.is_empty());
    }

    #[test]
    fn pin_patches_is_pinned() {
        let req = capture(|gw| {
            Posts::new(gw).pin(1, 5, true);
        });
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.url, "https://api.mn.co/admin/v1/networks/1/posts/5");
        assert_eq!(req.body, RequestBody::Json(json!({"is_pinned": true})));
    }

    #[test]
    fn unmute_is_delete_on_mute_path() {
        let req = capture(|gw| {
            Posts::new(gw).unmute(1, 5, 9);
        });
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "https://api.mn.co/admin/v1/networks/1/posts/5/mute");
        assert_eq!(req.query, vec![("user_id".to_string(), "9".to_string())]);
    }
}
