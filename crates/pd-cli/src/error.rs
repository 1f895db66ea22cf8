use pd_config::ConfigError;
use pd_core::{CoreError, FieldErrors};
use pd_dashboard::{CreatorError, DashboardError};
use pd_gateway::GatewayError;

use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source}")]
    Config {
        #[source]
        source: ConfigError,
    },

    #[error("{source}")]
    Gateway {
        #[source]
        source: GatewayError,
    },

    #[error("{source}")]
    Dashboard {
        #[source]
        source: DashboardError,
    },

    #[error("{source}")]
    Creator {
        #[source]
        source: CreatorError,
    },

    #[error("{source}")]
    Core {
        #[source]
        source: CoreError,
    },

    #[error("Invalid profile: {errors}")]
    Invalid { errors: FieldErrors },

    #[error("{message} {location}")]
    Failed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(source: ConfigError) -> Self {
        Self::Config { source }
    }
}

impl From<GatewayError> for CliError {
    fn from(source: GatewayError) -> Self {
        Self::Gateway { source }
    }
}

impl From<DashboardError> for CliError {
    fn from(source: DashboardError) -> Self {
        Self::Dashboard { source }
    }
}

impl From<CreatorError> for CliError {
    fn from(source: CreatorError) -> Self {
        Self::Creator { source }
    }
}

impl From<CoreError> for CliError {
    fn from(source: CoreError) -> Self {
        Self::Core { source }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
