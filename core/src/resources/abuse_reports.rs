//! Abuse reports filed by members.

use super::{network_path, Page, Payload};
use crate::gateway::Gateway;
use crate::request::OutboundRequest;
use crate::result::NormalizedResult;

pub struct AbuseReports<'a> {
    gateway: &'a Gateway,
}

impl<'a> AbuseReports<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Reports with the given status (`pending`, `resolved`, `dismissed`).
    pub fn list(&self, network_id: u64, page: Page, status: &str) -> NormalizedResult {
        let request = OutboundRequest::get(reports_path(network_id));
        self.gateway
            .execute(page.apply(request).query("status", status))
    }

    pub fn get(&self, network_id: u64, report_id: u64) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::get(format!(
            "{}/{report_id}",
            reports_path(network_id)
        )))
    }

    /// Close a report, recording the action taken.
    pub fn resolve(
        &self,
        network_id: u64,
        report_id: u64,
        action: &str,
        notes: &str,
    ) -> NormalizedResult {
        let body = Payload::new()
            .field("action", action)
            .field("notes", notes)
            .build();
        self.gateway.execute(
            OutboundRequest::post(format!("{}/{report_id}/resolve", reports_path(network_id)))
                .json(body),
        )
    }
}

fn reports_path(network_id: u64) -> String {
    format!("{}/abuse_reports", network_path(network_id))
}
