//! Membership plans and their subscribers.

use super::{network_path, Page, Payload};
use crate::gateway::Gateway;
use crate::request::{Fields, OutboundRequest};
use crate::result::NormalizedResult;

pub struct Plans<'a> {
    gateway: &'a Gateway,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPlan {
    pub name: String,
    pub description: String,
    pub price: f64,
    /// ISO 4217 code, `USD` by default.
    pub currency: String,
    /// `day`, `week`, `month` or `year`.
    pub interval: String,
    pub trial_days: u32,
}

impl NewPlan {
    /// Monthly USD plan without a trial.
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            currency: "USD".to_string(),
            interval: "month".to_string(),
            trial_days: 0,
        }
    }
}

impl<'a> Plans<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, network_id: u64, page: Page) -> NormalizedResult {
        self.gateway
            .execute(page.apply(OutboundRequest::get(plans_path(network_id))))
    }

    pub fn get(&self, network_id: u64, plan_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::get(plan_path(network_id, plan_id)))
    }

    pub fn create(&self, network_id: u64, plan: &NewPlan, extra: Fields) -> NormalizedResult {
        let body = Payload::new()
            .field("name", plan.name.as_str())
            .field("description", plan.description.as_str())
            .field("price", plan.price)
            .field("currency", plan.currency.as_str())
            .field("interval", plan.interval.as_str())
            .field("trial_days", plan.trial_days)
            .merge(extra);
        self.gateway
            .execute(OutboundRequest::post(plans_path(network_id)).json(body))
    }

    pub fn update(&self, network_id: u64, plan_id: u64, fields: Fields) -> NormalizedResult {
        self.gateway.execute(
            OutboundRequest::patch(plan_path(network_id, plan_id)).json(fields.into()),
        )
    }

    pub fn delete(&self, network_id: u64, plan_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::delete(plan_path(network_id, plan_id)))
    }

    pub fn subscribers(&self, network_id: u64, plan_id: u64, page: Page) -> NormalizedResult {
        let request = OutboundRequest::get(format!(
            "{}/subscribers",
            plan_path(network_id, plan_id)
        ));
        self.gateway.execute(page.apply(request))
    }
}

fn plans_path(network_id: u64) -> String {
    format!("{}/plans", network_path(network_id))
}

fn plan_path(network_id: u64, plan_id: u64) -> String {
    format!("{}/plans/{plan_id}", network_path(network_id))
}
