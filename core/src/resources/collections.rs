//! Curated collections of posts, events and other items.

use super::{network_path, Payload};
use crate::gateway::Gateway;
use crate::request::{Fields, OutboundRequest};
use crate::result::NormalizedResult;

pub struct Collections<'a> {
    gateway: &'a Gateway,
}

impl<'a> Collections<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, network_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::get(collections_path(network_id)))
    }

    pub fn get(&self, network_id: u64, collection_id: u64) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::get(collection_path(
            network_id,
            collection_id,
        )))
    }

    /// Create a collection. An empty `description` is not sent; a given one
    /// wins over `extra`.
    pub fn create(
        &self,
        network_id: u64,
        name: &str,
        description: Option<&str>,
        extra: Fields,
    ) -> NormalizedResult {
        let body = Payload::new()
            .field("name", name)
            .extend(extra)
            .field_opt("description", description.filter(|d| !d.is_empty()))
            .build();
        self.gateway
            .execute(OutboundRequest::post(collections_path(network_id)).json(body))
    }

    pub fn update(
        &self,
        network_id: u64,
        collection_id: u64,
        fields: Fields,
    ) -> NormalizedResult {
        self.gateway.execute(
            OutboundRequest::patch(collection_path(network_id, collection_id))
                .json(fields.into()),
        )
    }

    pub fn delete(&self, network_id: u64, collection_id: u64) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::delete(collection_path(
            network_id,
            collection_id,
        )))
    }

    /// Add an item such as a post or event to the collection.
    pub fn add_item(
        &self,
        network_id: u64,
        collection_id: u64,
        item_type: &str,
        item_id: u64,
    ) -> NormalizedResult {
        let body = Payload::new()
            .field("item_type", item_type)
            .field("item_id", item_id)
            .build();
        self.gateway.execute(
            OutboundRequest::post(format!(
                "{}/items",
                collection_path(network_id, collection_id)
            ))
            .json(body),
        )
    }

    pub fn remove_item(
        &self,
        network_id: u64,
        collection_id: u64,
        item_id: u64,
    ) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::delete(format!(
            "{}/items/{item_id}",
            collection_path(network_id, collection_id)
        )))
    }
}

fn collections_path(network_id: u64) -> String {
    format!("{}/collections", network_path(network_id))
}

fn collection_path(network_id: u64, collection_id: u64) -> String {
    format!("{}/collections/{collection_id}", network_path(network_id))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::http::{HttpMethod, RequestBody};
    use crate::resources::testing::capture;

    #[test]
    fn description_wins_over_extra() {
        let mut extra = Fields::new();
        extra.insert("description".to_string(), json!("from extra"));
        extra.insert("is_public".to_string(), json!(true));
        let req = capture(|gw| {
            Collections::new(gw).create(1, "Best of 2024", Some("Top posts"), extra);
        });
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "https://api.mn.co/admin/v1/networks/1/collections");
        assert_eq!(
            req.body,
            RequestBody::Json(json!({
                "name": "Best of 2024",
                "description": "Top posts",
                "is_public": true
            }))
        );
    }

    #[test]
    fn empty_description_leaves_extra_alone() {
        let mut extra = Fields::new();
        extra.insert("description".to_string(), json!("from extra"));
        let req = capture(|gw| {
            Collections::new(gw).create(1, "Drafts", Some(""), extra);
        });
        assert_eq!(
            req.body,
            RequestBody::Json(json!({"name": "Drafts", "description": "from extra"}))
        );

        let req = capture(|gw| {
            Collections::new(gw).create(1, "Drafts", None, Fields::new());
        });
        assert_eq!(req.body, RequestBody::Json(json!({"name": "Drafts"})));
    }

    #[test]
    fn add_item_posts_type_and_id() {
        let req = capture(|gw| {
            Collections::new(gw).add_item(1, 4, "post", 55);
        });
        assert_eq!(
            req.url,
            "https://api.mn.co/admin/v1/networks/1/collections/4/items"
        );
        assert_eq!(
            req.body,
            RequestBody::Json(json!({"item_type": "post", "item_id": 55}))
        );
    }

    #[test]
    fn remove_item_is_delete() {
        let req = capture(|gw| {
            Collections::new(gw).remove_item(1, 4, 55);
        });
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(
            req.url,
            "https://api.mn.co/admin/v1/networks/1/collections/4/items/55"
        );
    }
}
