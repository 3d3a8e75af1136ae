//! Shared harness: a mock API on a random port plus out-of-band inspection.

use std::net::SocketAddr;
use std::time::Duration;

use mighty_core::{GatewayConfig, GatewayConfigBuilder, MightyClient};

pub const TOKEN: &str = mock_server::DEFAULT_TOKEN;

pub struct Server {
    pub addr: SocketAddr,
}

impl Server {
    /// Start the mock server on its own thread and runtime.
    pub fn start() -> Self {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                mock_server::run(listener, TOKEN).await
            })
            .unwrap();
        });

        Self { addr }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn config(&self) -> GatewayConfigBuilder {
        GatewayConfig::builder(TOKEN)
            .base_url(self.base_url())
            .timeout(Duration::from_secs(5))
    }

    pub fn client(&self) -> MightyClient {
        MightyClient::from_config(self.config().build().unwrap()).unwrap()
    }

    /// Authenticated requests the server has seen, read with a separate
    /// HTTP client so the count is not disturbed.
    pub fn hits(&self) -> u64 {
        let body = ureq::get(&format!("{}/__hits", self.base_url()))
            .call()
            .unwrap()
            .body_mut()
            .read_to_string()
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        json["hits"].as_u64().unwrap()
    }
}

/// An address nothing is listening on.
pub fn closed_port() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
