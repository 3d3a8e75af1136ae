//! Network details.

use super::network_path;
use crate::gateway::Gateway;
use crate::request::OutboundRequest;
use crate::result::NormalizedResult;

pub struct Networks<'a> {
    gateway: &'a Gateway,
}

impl<'a> Networks<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub fn show(&self, network_id: u64) -> NormalizedResult {
        self.gateway
            .execute(OutboundRequest::get(network_path(network_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::resources::testing::capture;

    #[test]
    fn show_targets_network_root() {
        let req = capture(|gw| {
            Networks::new(gw).show(12345);
        });
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://api.mn.co/admin/v1/networks/12345");
    }
}
