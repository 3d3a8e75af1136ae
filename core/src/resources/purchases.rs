//! One-off purchases and refunds.

use super::{network_path, Page, Payload};
use crate::gateway::Gateway;
use crate::request::OutboundRequest;
use crate::result::NormalizedResult;

pub struct Purchases<'a> {
    gateway: &'a Gateway,
}

impl<'a> Purchases<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, network_id: u64, page: Page) -> NormalizedResult {
        let request =
            OutboundRequest::get(format!("{}/purchases", network_path(network_id)));
        self.gateway.execute(page.apply(request))
    }

    pub fn get(&self, network_id: u64, purchase_id: u64) -> NormalizedResult {
        self.gateway.execute(OutboundRequest::get(format!(
            "{}/purchases/{purchase_id}",
            network_path(network_id)
        )))
    }

    /// Refund a purchase; without `amount` the upstream refunds in full.
    pub fn refund(
        &self,
        network_id: u64,
        purchase_id: u64,
        amount: Option<f64>,
        reason: Option<&str>,
    ) -> NormalizedResult {
        let body = Payload::new()
            .field_opt("amount", amount)
            .field_opt("reason", reason)
            .build();
        self.gateway.execute(
            OutboundRequest::post(format!(
                "{}/purchases/{purchase_id}/refund",
                network_path(network_id)
            ))
            .json(body),
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::http::RequestBody;
    use crate::resources::testing::capture;

    #[test]
    fn refund_sends_only_given_fields() {
        let req = capture(|gw| {
            Purchases::new(gw).refund(1, 777, None, Some("Customer request"));
        });
        assert_eq!(
            req.url,
            "https://api.mn.co/admin/v1/networks/1/purchases/777/refund"
        );
        assert_eq!(
            req.body,
            RequestBody::Json(json!({"reason": "Customer request"}))
        );
    }
}
