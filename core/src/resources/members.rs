//! Members of a network or of one of its spaces.

use super::{network_path, Page, Payload};
use crate::gateway::Gateway;
use crate::request::{Fields, OutboundRequest};
use crate::result::NormalizedResult;

pub struct Members<'a> {
    gateway: &'a Gateway,
}

/// Profile changes; `None` fields are left untouched upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberUpdate {
    pub role: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// A person to add to a space by email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSpaceMember {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
}

impl NewSpaceMember {
    /// Member with the default `member` role.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            first_name: None,
            last_name: None,
            role: "member".to_string(),
        }
    }
}

impl<'a> Members<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Members of the network, or of `space_id` when given.
    pub fn list(&self, network_id: u64, space_id: Option<u64>, page: Page) -> NormalizedResult {
        let request = OutboundRequest::get(members_path(network_id, space_id));
        self.gateway.execute(page.apply(request))
    }

    pub fn get(&self, network_id: u64, user_id: u64, space_id: Option<u64>) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::get(member_path(
            network_id, user_id, space_id,
        )))
    }

    pub fn update(
        &self,
        network_id: u64,
        user_id: u64,
        space_id: Option<u64>,
        update: &MemberUpdate,
        extra: Fields,
    ) -> NormalizedResult {
        let body = Payload::new()
            .field_opt("role", update.role.as_deref())
            .field_opt("email", update.email.as_deref())
            .field_opt("first_name", update.first_name.as_deref())
            .field_opt("last_name", update.last_name.as_deref())
            .merge(extra);
        self.gateway.execute(
            OutboundRequest::patch(member_path(network_id, user_id, space_id)).json(body),
        )
    }

    /// Remove a member from a space.
    pub fn remove(&self, network_id: u64, user_id: u64, space_id: u64) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::delete(member_path(
            network_id,
            user_id,
            Some(space_id),
        )))
    }

    pub fn ban(
        &self,
        network_id: u64,
        user_id: u64,
        space_id: u64,
        ban_reason: Option<&str>,
    ) -> NormalizedResult {
        let body = Payload::new().field_opt("ban_reason", ban_reason).build();
        self.gateway.execute(
            OutboundRequest::post(format!(
                "{}/ban",
                member_path(network_id, user_id, Some(space_id))
            ))
            .json(body),
        )
    }

    pub fn add_to_space(
        &self,
        network_id: u64,
        space_id: u64,
        member: &NewSpaceMember,
    ) -> NormalizedResult {
        let body = Payload::new()
            .field("email", member.email.as_str())
            .field("role", member.role.as_str())
            .field_opt("first_name", member.first_name.as_deref())
            .field_opt("last_name", member.last_name.as_deref())
            .build();
        self.gateway.execute(
            OutboundRequest::post(members_path(network_id, Some(space_id))).json(body),
        )
    }
}

fn members_path(network_id: u64, space_id: Option<u64>) -> String {
    match space_id {
        Some(space_id) => format!("{}/spaces/{space_id}/members", network_path(network_id)),
        None => format!("{}/members", network_path(network_id)),
    }
}

fn member_path(network_id: u64, user_id: u64, space_id: Option<u64>) -> String {
    format!("{}/{user_id}", members_path(network_id, space_id))
}
