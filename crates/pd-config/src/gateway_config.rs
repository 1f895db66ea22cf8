use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_GATEWAY_URL, DEFAULT_PROFILES_TABLE,
    DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use serde::Deserialize;
use url::Url;

/// Remote identity service and record store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Project base URL; auth lives under /auth/v1, records under /rest/v1
    pub url: String,
    /// Public (anon) API key sent with every request
    pub api_key: String,
    /// Table holding profile records
    pub profiles_table: String,
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_GATEWAY_URL),
            api_key: String::new(),
            profiles_table: String::from(DEFAULT_PROFILES_TABLE),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let parsed = Url::parse(&self.url).map_err(|e| {
            ConfigError::gateway(format!("gateway.url is not a valid URL ({}): {e}", self.url))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::gateway(format!(
                "gateway.url must use http or https, got {}",
                parsed.scheme()
            )));
        }

        if self.api_key.trim().is_empty() {
            return Err(ConfigError::gateway(
                "gateway.api_key is required (set it in config.toml or PD_GATEWAY_API_KEY)",
            ));
        }

        if self.profiles_table.trim().is_empty() {
            return Err(ConfigError::gateway("gateway.profiles_table cannot be empty"));
        }

        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::gateway(format!(
                "gateway.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
