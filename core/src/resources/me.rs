//! The member that owns the API token.

use super::network_path;
use crate::gateway::Gateway;
use crate::request::OutboundRequest;
use crate::result::NormalizedResult;

pub struct Me<'a> {
    gateway: &'a Gateway,
}

impl<'a> Me<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Profile of the authenticated member within `network_id`.
    pub fn show(&self, network_id: u64) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::get(format!(
            "{}/me",
            network_path(network_id)
        )))
    }
}
