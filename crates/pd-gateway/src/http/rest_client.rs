use crate::records::api_error_body::ApiErrorBody;
use crate::{GatewayError, GatewayResult};

use pd_config::GatewayConfig;

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::de::DeserializeOwned;

const API_KEY_HEADER: &str = "apikey";

/// Shared HTTP plumbing for the identity service and the record store
#[derive(Clone)]
pub struct RestClient {
    base_url: String,
    api_key: String,
    client: ReqwestClient,
}

impl RestClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "http://127.0.0.1:54321")
    /// * `api_key` - Public API key sent in the `apikey` header
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> GatewayResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    pub fn from_config(config: &GatewayConfig) -> GatewayResult<Self> {
        Self::new(
            &config.url,
            &config.api_key,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Build a request carrying the API key
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        self.client
            .request(method, &url)
            .header(API_KEY_HEADER, &self.api_key)
    }

    /// Execute request and decode a JSON body
    pub async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> GatewayResult<T> {
        let bytes = Self::send(req).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Execute request and discard the body
    pub async fn execute_empty(&self, req: RequestBuilder) -> GatewayResult<()> {
        Self::send(req).await.map(|_| ())
    }

    async fn send(req: RequestBuilder) -> GatewayResult<Vec<u8>> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body = ApiErrorBody::parse(&bytes);
            let code = body.code().unwrap_or_else(|| status.as_u16().to_string());
            let message = body.message().unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
            return Err(GatewayError::api_error(status.as_u16(), code, message));
        }

        Ok(bytes.to_vec())
    }
}
