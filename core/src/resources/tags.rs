//! Tags used to label content.

use super::{network_path, Payload};
use crate::gateway::Gateway;
use crate::request::{Fields, OutboundRequest};
use crate::result::NormalizedResult;

pub struct Tags<'a> {
    gateway: &'a Gateway,
}

impl<'a> Tags<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, network_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::get(tags_path(network_id)))
    }

    pub fn get(&self, network_id: u64, tag_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::get(tag_path(network_id, tag_id)))
    }

    pub fn create(&self, network_id: u64, name: &str, extra: Fields) -> NormalizedResult {
        let body = Payload::new().field("name", name).merge(extra);
        self.gateway
            .execute(OutboundRequest::post(tags_path(network_id)).json(body))
    }

    pub fn update(&self, network_id: u64, tag_id: u64, fields: Fields) -> NormalizedResult {
        self.gateway.execute(
            OutboundRequest::patch(tag_path(network_id, tag_id)).json(fields.into()),
        )
    }

    pub fn delete(&self, network_id: u64, tag_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::delete(tag_path(network_id, tag_id)))
    }
}

fn tags_path(network_id: u64) -> String {
    format!("{}/tags", network_path(network_id))
}

fn tag_path(network_id: u64, tag_id: u64) -> String {
    format!("{}/tags/{tag_id}", network_path(network_id))
}
