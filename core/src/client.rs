//! Entry point tying the gateway to the resource bindings.
//!
//! # Design
//! `MightyClient` owns one `Gateway` and hands out short-lived bindings that
//! borrow it. The bindings keep no state of their own, so the client is as
//! cheap to clone and as thread-safe as the gateway itself.

use crate::config::GatewayConfig;
use crate::error::ConfigError;
use crate::gateway::Gateway;
use crate::resources::{
    AbuseReports, Assets, Badges, Collections, Comments, CustomFields, Events, Invites, Me,
    Members, Networks, Plans, Polls, Posts, Purchases, Spaces, Subscriptions, Tags,
};

/// Client for the Mighty Networks admin API.
#[derive(Debug, Clone)]
pub struct MightyClient {
    gateway: Gateway,
}

impl MightyClient {
    /// Client for the production API with default settings.
    pub fn new(api_token: impl Into<String>) -> Result<Self, ConfigError> {
        Self::from_config(GatewayConfig::new(api_token)?)
    }

    pub fn from_config(config: GatewayConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_gateway(Gateway::new(config)?))
    }

    /// Client configured from `MIGHTY_NETWORKS_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_config(GatewayConfig::from_env()?)
    }

    pub fn with_gateway(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// The underlying gateway, for endpoints without a binding.
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn network(&self) -> Networks<'_> {
        Networks::new(&self.gateway)
    }

    pub fn me(&self) -> Me<'_> {
        Me::new(&self.gateway)
    }

    pub fn spaces(&self) -> Spaces<'_> {
        Spaces::new(&self.gateway)
    }

    pub fn members(&self) -> Members<'_> {
        Members::new(&self.gateway)
    }

    pub fn posts(&self) -> Posts<'_> {
        Posts::new(&self.gateway)
    }

    pub fn comments(&self) -> Comments<'_> {
        Comments::new(&self.gateway)
    }

    pub fn events(&self) -> Events<'_> {
        Events::new(&self.gateway)
    }

    pub fn polls(&self) -> Polls<'_> {
        Polls::new(&self.gateway)
    }

    pub fn plans(&self) -> Plans<'_> {
        Plans::new(&self.gateway)
    }

    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(&self.gateway)
    }

    pub fn purchases(&self) -> Purchases<'_> {
        Purchases::new(&self.gateway)
    }

    pub fn custom_fields(&self) -> CustomFields<'_> {
        CustomFields::new(&self.gateway)
    }

    pub fn tags(&self) -> Tags<'_> {
        Tags::new(&self.gateway)
    }

    pub fn badges(&self) -> Badges<'_> {
        Badges::new(&self.gateway)
    }

    pub fn collections(&self) -> Collections<'_> {
        Collections::new(&self.gateway)
    }

    pub fn invites(&self) -> Invites<'_> {
        Invites::new(&self.gateway)
    }

    pub fn abuse_reports(&self) -> AbuseReports<'_> {
        AbuseReports::new(&self.gateway)
    }

    pub fn assets(&self) -> Assets<'_> {
        Assets::new(&self.gateway)
    }
}
