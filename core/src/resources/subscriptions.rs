//! Plan subscriptions held by members.

use super::{network_path, Payload};
use crate::gateway::Gateway;
use crate::request::OutboundRequest;
use crate::result::NormalizedResult;

pub struct Subscriptions<'a> {
    gateway: &'a Gateway,
}

impl<'a> Subscriptions<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, network_id: u64) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::get(format!(
            "{}/subscriptions",
            network_path(network_id)
        )))
    }

    pub fn get(&self, network_id: u64, subscription_id: u64) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::get(format!(
            "{}/subscriptions/{subscription_id}",
            network_path(network_id)
        )))
    }

    /// Cancel a subscription. The reason is sent only when given.
    pub fn cancel(
        &self,
        network_id: u64,
        subscription_id: u64,
        reason: Option<&str>,
    ) -> NormalizedResult {
        let body = Payload::new().field_opt("reason", reason).build();
        self.gateway.execute(
            OutboundRequest::post(format!(
                "{}/subscriptions/{subscription_id}/cancel",
                network_path(network_id)
            ))
            .json(body),
        )
    }
}
