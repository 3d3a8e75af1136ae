//! Custom member profile fields and their per-member values.

use super::{network_path, Payload};
use crate::gateway::Gateway;
use crate::request::{Fields, OutboundRequest};
use crate::result::NormalizedResult;

pub struct CustomFields<'a> {
    gateway: &'a Gateway,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCustomField {
    pub name: String,
    /// `text`, `textarea`, `select`, `checkbox`, `radio`, ...
    pub field_type: String,
    pub required: bool,
    /// Choices for select and radio fields; omitted when empty.
    pub options: Vec<String>,
}

impl<'a> CustomFields<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, network_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::get(fields_path(network_id)))
    }

    pub fn get(&self, network_id: u64, field_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::get(field_path(network_id, field_id)))
    }

    pub fn create(
        &self,
        network_id: u64,
        field: &NewCustomField,
        extra: Fields,
    ) -> NormalizedResult {
        let options = (!field.options.is_empty()).then(|| field.options.clone());
        let body = Payload::new()
            .field("name", field.name.as_str())
            .field("field_type", field.field_type.as_str())
            .field("required", field.required)
            .extend(extra)
            .field_opt("options", options)
            .build();
        self.gateway
            .execute(OutboundRequest::post(fields_path(network_id)).json(body))
    }

    pub fn update(&self, network_id: u64, field_id: u64, fields: Fields) -> NormalizedResult {
        self.gateway.execute(
            OutboundRequest::patch(field_path(network_id, field_id)).json(fields.into()),
        )
    }

    pub fn delete(&self, network_id: u64, field_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::delete(field_path(network_id, field_id)))
    }

    /// Custom field values stored on one member.
    pub fn member_values(&self, network_id: u64, user_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::get(member_values_path(network_id, user_id)))
    }

    /// Set custom field values on one member, keyed by field.
    pub fn update_member_values(
        &self,
        network_id: u64,
        user_id: u64,
        values: Fields,
    ) -> NormalizedResult {
        self.gateway.execute(
            OutboundRequest::patch(member_values_path(network_id, user_id)).json(values.into()),
        )
    }
}

fn fields_path(network_id: u64) -> String {
    format!("{}/custom_fields", network_path(network_id))
}

fn field_path(network_id: u64, field_id: u64) -> String {
    format!("{}/custom_fields/{field_id}", network_path(network_id))
}

fn member_values_path(network_id: u64, user_id: u64) -> String {
    format!("{}/members/{user_id}/custom_fields", network_path(network_id))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::http::RequestBody;
    use crate::resources::testing::capture;

    #[test]
    fn options_are_sent_only_when_present() {
        let field = NewCustomField {
            name: "Company".to_string(),
            field_type: "text".to_string(),
            required: true,
            options: Vec::new(),
        };
        let req = capture(|gw| {
            CustomFields::new(gw).create(1, &field, Fields::new());
        });
        assert_eq!(
            req.body,
            RequestBody::Json(json!({"name": "Company", "field_type": "text", "required": true}))
        );
    }

    #[test]
    fn options_win_over_extra() {
        let field = NewCustomField {
            name: "Industry".to_string(),
            field_type: "select".to_string(),
            required: false,
            options: vec!["Technology".to_string(), "Other".to_string()],
        };
        let mut extra = Fields::new();
        extra.insert("options".to_string(), json!([]));
        let req = capture(|gw| {
            CustomFields::new(gw).create(1, &field, extra);
        });
        match req.body {
            RequestBody::Json(body) => assert_eq!(body["options"], json!(["Technology", "Other"])),
            other => panic!("expected JSON body, got {other:?}"),
        }
    }

    #[test]
    fn member_values_path() {
        let req = capture(|gw| {
            CustomFields::new(gw).member_values(1, 42);
        });
        assert_eq!(
            req.url,
            "https://api.mn.co/admin/v1/networks/1/members/42/custom_fields"
        );
    }
}
