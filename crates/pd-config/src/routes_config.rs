use crate::{ConfigError, ConfigErrorResult, DEFAULT_PROTECTED_PATH, DEFAULT_PUBLIC_PATH};

use serde::Deserialize;

/// The two addressable views.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Landing view shown to anonymous users
    pub public_path: String,
    /// Profile directory shown to signed-in users
    pub protected_path: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            public_path: String::from(DEFAULT_PUBLIC_PATH),
            protected_path: String::from(DEFAULT_PROTECTED_PATH),
        }
    }
}

impl RoutesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (key, path) in [
            ("routes.public_path", &self.public_path),
            ("routes.protected_path", &self.protected_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::routes(format!(
                    "{key} must start with '/', got '{path}'"
                )));
            }
        }

        if self.public_path == self.protected_path {
            return Err(ConfigError::routes(
                "routes.public_path and routes.protected_path must differ",
            ));
        }

        Ok(())
    }
}
