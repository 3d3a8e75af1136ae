//! Spaces (groups within a network) and their membership.

use super::{network_path, Payload};
use crate::gateway::Gateway;
use crate::request::{Fields, OutboundRequest};
use crate::result::NormalizedResult;

pub struct Spaces<'a> {
    gateway: &'a Gateway,
}

impl<'a> Spaces<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, network_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::get(spaces_path(network_id)))
    }

    pub fn get(&self, network_id: u64, space_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::get(space_path(network_id, space_id)))
    }

    /// Create a space named `name`; `extra` carries any other properties.
    pub fn create(&self, network_id: u64, name: &str, extra: Fields) -> NormalizedResult {
        let body = Payload::new().field("name", name).merge(extra);
        self.gateway
            .execute(OutboundRequest::post(spaces_path(network_id)).json(body))
    }

    pub fn update(&self, network_id: u64, space_id: u64, fields: Fields) -> NormalizedResult {
        self.gateway.execute(
            OutboundRequest::patch(space_path(network_id, space_id)).json(fields.into()),
        )
    }

    pub fn delete(&self, network_id: u64, space_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::delete(space_path(network_id, space_id)))
    }

    pub fn list_members(&self, network_id: u64, space_id: u64) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::get(format!(
            "{}/members",
            space_path(network_id, space_id)
        )))
    }

    /// Add an existing user to the space.
    pub fn add_member(&self, network_id: u64, space_id: u64, user_id: u64) -> NormalizedResult {
        self.gateway.execute(
            OutboundRequest::post(format!("{}/members", space_path(network_id, space_id)))
                .query("user_id", user_id),
        )
    }

    pub fn get_member(&self, network_id: u64, space_id: u64, member_id: u64) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::get(member_path(
            network_id, space_id, member_id,
        )))
    }

    /// Replace a member's role in the space. `role` wins over any `role`
    /// key in `extra`.
    pub fn update_member_role(
        &self,
        network_id: u64,
        space_id: u64,
        member_id: u64,
        role: &str,
        extra: Fields,
    ) -> NormalizedResult {
        let body = Payload::new().extend(extra).field("role", role).build();
        self.gateway.execute(
            OutboundRequest::put(member_path(network_id, space_id, member_id)).json(body),
        )
    }

    pub fn remove_member(
        &self,
        network_id: u64,
        space_id: u64,
        member_id: u64,
    ) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::delete(member_path(
            network_id, space_id, member_id,
        )))
    }
}

fn spaces_path(network_id: u64) -> String {
    format!("{}/spaces", network_path(network_id))
}

fn space_path(network_id: u64, space_id: u64) -> String {
    format!("{}/spaces/{space_id}", network_path(network_id))
}

fn member_path(network_id: u64, space_id: u64, member_id: u64) -> String {
    format!("{}/members/{member_id}", space_path(network_id, space_id))
}
