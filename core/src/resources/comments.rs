//! Comments on posts.

use super::{network_path, Payload};
use crate::gateway::Gateway;
use crate::request::OutboundRequest;
use crate::result::NormalizedResult;

pub struct Comments<'a> {
    gateway: &'a Gateway,
}

impl<'a> Comments<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, network_id: u64, space_id: u64, post_id: u64) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::get(format!(
            "{}/spaces/{space_id}/posts/{post_id}/comments",
            network_path(network_id)
        )))
    }

    /// Comment on a post, optionally as a reply to another comment.
    pub fn create(
        &self,
        network_id: u64,
        post_id: u64,
        text: &str,
        reply_to_id: Option<u64>,
    ) -> NormalizedResult {
        let body = Payload::new()
            .field("text", text)
            .field_opt("reply_to_id", reply_to_id)
            .build();
        self.gateway.execute(
            OutboundRequest::post(format!(
                "{}/posts/{post_id}/comments",
                network_path(network_id)
            ))
            .json(body),
        )
    }

    pub fn delete(
        &self,
        network_id: u64,
        space_id: u64,
        post_id: u64,
        comment_id: u64,
    ) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::delete(format!(
            "{}/spaces/{space_id}/posts/{post_id}/comments/{comment_id}",
            network_path(network_id)
        )))
    }
}
