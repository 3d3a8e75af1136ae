//! Polls posted in spaces.

use super::{network_path, Payload};
use crate::gateway::Gateway;
use crate::request::{Fields, OutboundRequest};
use crate::result::NormalizedResult;

pub struct Polls<'a> {
    gateway: &'a Gateway,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPoll {
    pub question: String,
    pub options: Vec<String>,
    pub allow_multiple: bool,
}

impl<'a> Polls<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, network_id: u64, space_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::get(polls_path(network_id, space_id)))
    }

    pub fn get(&self, network_id: u64, space_id: u64, poll_id: u64) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::get(poll_path(
            network_id, space_id, poll_id,
        )))
    }

    pub fn create(
        &self,
        network_id: u64,
        space_id: u64,
        poll: &NewPoll,
        extra: Fields,
    ) -> NormalizedResult {
        let body = Payload::new()
            .field("question", poll.question.as_str())
            .field("options", poll.options.clone())
            .field("allow_multiple", poll.allow_multiple)
            .merge(extra);
        self.gateway
            .execute(OutboundRequest::post(polls_path(network_id, space_id)).json(body))
    }

    pub fn update(
        &self,
        network_id: u64,
        space_id: u64,
        poll_id: u64,
        fields: Fields,
    ) -> NormalizedResult {
        self.gateway.execute(
            OutboundRequest::patch(poll_path(network_id, space_id, poll_id)).json(fields.into()),
        )
    }

    pub fn delete(&self, network_id: u64, space_id: u64, poll_id: u64) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::delete(poll_path(
            network_id, space_id, poll_id,
        )))
    }
}

fn polls_path(network_id: u64, space_id: u64) -> String {
    format!("{}/spaces/{space_id}/polls", network_path(network_id))
}

fn poll_path(network_id: u64, space_id: u64, poll_id: u64) -> String {
    format!("{}/{poll_id}", polls_path(network_id, space_id))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::http::{HttpMethod, RequestBody};
    use crate::resources::testing::capture;

    #[test]
    fn create_sends_question_and_options() {
        let poll = NewPoll {
            question: "Next meetup?".to_string(),
            options: vec!["Friday".to_string(), "Saturday".to_string()],
            allow_multiple: true,
        };
        let req = capture(|gw| {
            Polls::new(gw).create(1, 2, &poll, Fields::new());
        });
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "https://api.mn.co/admin/v1/networks/1/spaces/2/polls");
        assert_eq!(
            req.body,
            RequestBody::Json(json!({
                "question": "Next meetup?",
                "options": ["Friday", "Saturday"],
                "allow_multiple": true
            }))
        );
    }

    #[test]
    fn delete_targets_poll() {
        let req = capture(|gw| {
            Polls::new(gw).delete(1, 2, 9);
        });
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "https://api.mn.co/admin/v1/networks/1/spaces/2/polls/9");
    }
}
