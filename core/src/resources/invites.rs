//! Invitations to join the network or a space.

use super::{network_path, Payload};
use crate::gateway::Gateway;
use crate::request::{Fields, OutboundRequest};
use crate::result::NormalizedResult;

pub struct Invites<'a> {
    gateway: &'a Gateway,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewInvite {
    pub emails: Vec<String>,
    /// Invite straight into this space instead of the network only.
    pub space_id: Option<u64>,
    pub message: Option<String>,
}

impl<'a> Invites<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, network_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::get(invites_path(network_id)))
    }

    /// Create and send invitations. A set `space_id` or `message` wins over
    /// `extra`; a zero id or empty message counts as unset.
    pub fn create(&self, network_id: u64, invite: &NewInvite, extra: Fields) -> NormalizedResult {
        let body = Payload::new()
            .field("emails", invite.emails.clone())
            .extend(extra)
            .field_opt("space_id", invite.space_id.filter(|id| *id != 0))
            .field_opt(
                "message",
                invite.message.as_deref().filter(|m| !m.is_empty()),
            )
            .build();
        self.gateway
            .execute(OutboundRequest::post(invites_path(network_id)).json(body))
    }

    pub fn get(&self, network_id: u64, invite_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::get(invite_path(network_id, invite_id)))
    }

    pub fn resend(&self, network_id: u64, invite_id: u64) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::post(format!(
            "{}/resend",
            invite_path(network_id, invite_id)
        )))
    }

    pub fn revoke(&self, network_id: u64, invite_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::delete(invite_path(network_id, invite_id)))
    }
}

fn invites_path(network_id: u64) -> String {
    format!("{}/invites", network_path(network_id))
}

fn invite_path(network_id: u64, invite_id: u64) -> String {
    format!("{}/invites/{invite_id}", network_path(network_id))
}
