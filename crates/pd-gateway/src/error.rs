use error_location::ErrorLocation;
use std::panic::Location;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the identity service and record store clients
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (code: {code}, status: {status}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed record: {message} {location}")]
    Record {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session storage error at {path}: {source} {location}")]
    Storage {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },
}

impl GatewayError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        GatewayError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        GatewayError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, code: String, message: String) -> Self {
        GatewayError::Api {
            status,
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn record(message: impl Into<String>) -> Self {
        GatewayError::Record {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage(path: PathBuf, source: std::io::Error) -> Self {
        GatewayError::Storage {
            path,
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    /// The request reached (or tried to reach) the remote service and failed
    /// there: a transport failure or an explicit rejection. Everything else
    /// is a local surprise.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Api { .. })
    }

    /// The service rejected the request
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Message suitable for showing inline, without code locations
    pub fn detail(&self) -> String {
        match self {
            Self::Http { message, .. }
            | Self::Api { message, .. }
            | Self::Json { message, .. }
            | Self::Record { message, .. } => message.clone(),
            Self::Storage { source, .. } => source.to_string(),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        GatewayError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for GatewayError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        GatewayError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
