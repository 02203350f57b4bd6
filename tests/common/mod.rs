#![allow(dead_code)]

use std::time::Duration;

use cookmaster_sdk::{ClientConfig, CookMasterClient};
use mockito::ServerGuard;

pub const TEST_API_KEY: &str = "test-api-key";

pub struct TestEnvironment {
    pub server: ServerGuard,
    pub base_url: String,
    pub client: CookMasterClient,
}

impl TestEnvironment {
    /// Starts a mock CookMaster server and a client pointed at its `/v1` root.
    pub async fn new() -> anyhow::Result<Self> {
        let server = mockito::Server::new_async().await;
        let base_url = format!("{}/v1/", server.url());

        let config = ClientConfig::new(TEST_API_KEY)
            .base_url(base_url.clone())
            .timeout(Duration::from_secs(5));
        let client = CookMasterClient::with_config(config)?;

        Ok(Self {
            server,
            base_url,
            client,
        })
    }
}

/// Address of a local port with nothing listening on it.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/v1", port)
}

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
