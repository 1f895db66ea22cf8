mod config;
mod error;
mod gateway_config;
mod log_level;
mod logging_config;
mod routes_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use gateway_config::GatewayConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use routes_config::RoutesConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "PD_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".pd";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:54321";
const DEFAULT_PROFILES_TABLE: &str = "Links";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

const DEFAULT_PUBLIC_PATH: &str = "/";
const DEFAULT_PROTECTED_PATH: &str = "/dashboard";

const DEFAULT_SESSION_FILENAME: &str = "session.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
