//! Badges and awarding them to members.

use super::{network_path, Payload};
use crate::gateway::Gateway;
use crate::request::{Fields, OutboundRequest};
use crate::result::NormalizedResult;

pub struct Badges<'a> {
    gateway: &'a Gateway,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBadge {
    pub title: String,
    pub description: String,
    pub avatar_id: Option<u64>,
    pub color: Option<String>,
}

impl<'a> Badges<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, network_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::get(badges_path(network_id)))
    }

    pub fn get(&self, network_id: u64, badge_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::get(badge_path(network_id, badge_id)))
    }

    pub fn create(&self, network_id: u64, badge: &NewBadge) -> NormalizedResult {
        let body = Payload::new()
            .field("title", badge.title.as_str())
            .field("description", badge.description.as_str())
            .field_opt("avatar_id", badge.avatar_id)
            .field_opt("color", badge.color.as_deref())
            .build();
        self.gateway
            .execute(OutboundRequest::post(badges_path(network_id)).json(body))
    }

    pub fn update(&self, network_id: u64, badge_id: u64, fields: Fields) -> NormalizedResult {
        self.gateway.execute(
            OutboundRequest::patch(badge_path(network_id, badge_id)).json(fields.into()),
        )
    }

    pub fn delete(&self, network_id: u64, badge_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::delete(badge_path(network_id, badge_id)))
    }

    /// Award a badge to a member.
    pub fn award(&self, network_id: u64, badge_id: u64, user_id: u64) -> NormalizedResult {
        let body = Payload::new().field("user_id", user_id).build();
        self.gateway.execute(
            OutboundRequest::post(format!("{}/award", badge_path(network_id, badge_id)))
                .json(body),
        )
    }
}

fn badges_path(network_id: u64) -> String {
    format!("{}/badges", network_path(network_id))
}

fn badge_path(network_id: u64, badge_id: u64) -> String {
    format!("{}/badges/{badge_id}", network_path(network_id))
}
