/*
[INPUT]:  HTTP configuration (base URLs, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::http::{Result, SolmobileError};

/// Base URLs for the authentication service and the cluster RPC endpoint
const AUTH_BASE_URL: &str = "https://api.solmobile.app";
const RPC_BASE_URL: &str = "https://api.devnet.solana.com";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the SolMobile backend services
#[derive(Debug)]
pub struct SolmobileClient {
    http_client: Client,
    auth_base_url: Url,
    rpc_base_url: Url,
}

impl SolmobileClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_urls(config, AUTH_BASE_URL, RPC_BASE_URL)
    }

    /// Create a client pointed at explicit base URLs (used by tests)
    pub fn with_config_and_base_urls(
        config: ClientConfig,
        auth_base_url: &str,
        rpc_base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            auth_base_url: Url::parse(auth_base_url)?,
            rpc_base_url: Url::parse(rpc_base_url)?,
        })
    }

    /// Build request builder for authentication service endpoints
    pub(crate) fn auth_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.auth_base_url.join(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Build a POST request against the cluster RPC endpoint
    pub(crate) fn rpc_request(&self) -> RequestBuilder {
        self.http_client.post(self.rpc_base_url.clone())
    }

    /// Send a request and decode the JSON body; non-2xx is `ServerRejected`
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SolmobileError::server_rejected(status, message));
        }

        Ok(response.json::<T>().await?)
    }
}
