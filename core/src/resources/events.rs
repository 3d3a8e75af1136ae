//! Events scheduled in spaces.

use super::{network_path, Payload};
use crate::gateway::Gateway;
use crate::request::{Fields, OutboundRequest};
use crate::result::NormalizedResult;

pub struct Events<'a> {
    gateway: &'a Gateway,
}

/// Times are ISO 8601 strings, passed through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub location: Option<String>,
    pub is_online: bool,
    pub max_attendees: Option<u32>,
}

impl<'a> Events<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, network_id: u64, space_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::get(events_path(network_id, space_id)))
    }

    pub fn get(&self, network_id: u64, space_id: u64, event_id: u64) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::get(event_path(
            network_id, space_id, event_id,
        )))
    }

    pub fn create(
        &self,
        network_id: u64,
        space_id: u64,
        event: &NewEvent,
        extra: Fields,
    ) -> NormalizedResult {
        let body = Payload::new()
            .field("title", event.title.as_str())
            .field("description", event.description.as_str())
            .field("start_time", event.start_time.as_str())
            .field("end_time", event.end_time.as_str())
            .field("is_online", event.is_online)
            .field_opt("location", event.location.as_deref())
            .field_opt("max_attendees", event.max_attendees)
            .merge(extra);
        self.gateway.execute(
            OutboundRequest::post(events_path(network_id, space_id)).json(body),
        )
    }

    pub fn update(
        &self,
        network_id: u64,
        space_id: u64,
        event_id: u64,
        fields: Fields,
    ) -> NormalizedResult {
        self.gateway.execute(
            OutboundRequest::patch(event_path(network_id, space_id, event_id))
                .json(fields.into()),
        )
    }

    pub fn delete(&self, network_id: u64, space_id: u64, event_id: u64) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::delete(event_path(
            network_id, space_id, event_id,
        )))
    }

    /// Members who RSVP'd to the event.
    pub fn attendees(&self, network_id: u64, space_id: u64, event_id: u64) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::get(format!(
            "{}/attendees",
            event_path(network_id, space_id, event_id)
        )))
    }
}

fn events_path(network_id: u64, space_id: u64) -> String {
    format!("{}/spaces/{space_id}/events", network_path(network_id))
}

fn event_path(network_id: u64, space_id: u64, event_id: u64) -> String {
    format!("{}/{event_id}", events_path(network_id, space_id))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::http::RequestBody;
    use crate::resources::testing::capture;

    #[test]
    fn create_includes_optional_fields_when_set() {
        let event = NewEvent {
            title: "Community Meetup".to_string(),
            description: "Casual meetup".to_string(),
            start_time: "2024-03-01T18:00:00Z".to_string(),
            end_time: "2024-03-01T20:00:00Z".to_string(),
            location: Some("San Francisco, CA".to_string()),
            is_online: false,
            max_attendees: Some(50),
        };
        let req = capture(|gw| {
            Events::new(gw).create(12345, 67890, &event, Fields::new());
        });
        assert_eq!(
            req.url,
            "https://api.mn.co/admin/v1/networks/12345/spaces/67890/events"
        );
        assert_eq!(
            req.body,
            RequestBody::Json(json!({
                "title": "Community Meetup",
                "description": "Casual meetup",
                "start_time": "2024-03-01T18:00:00Z",
                "end_time": "2024-03-01T20:00:00Z",
                "is_online": false,
                "location": "San Francisco, CA",
                "max_attendees": 50
            }))
        );
    }
}
