//! pd-gateway
//!
//! The two remote capabilities the dashboard depends on: the identity
//! service ([`AuthGateway`]) and the profile record store
//! ([`ProfileStoreBackend`]), plus HTTP clients for a Supabase-style
//! deployment of both.

mod auth_gateway;
mod error;
mod http;
mod profile_backend;
mod records;
mod session_feed;
mod session_storage;

#[cfg(test)]
mod tests;

pub use auth_gateway::{AuthGateway, SignUpOutcome};
pub use error::{GatewayError, Result as GatewayResult};
pub use http::http_auth_gateway::HttpAuthGateway;
pub use http::http_profile_backend::HttpProfileBackend;
pub use http::rest_client::RestClient;
pub use profile_backend::{ProfileOrder, ProfileStoreBackend};
pub use session_feed::{SessionEvent, SessionEventKind, SessionFeed, Subscription};
pub use session_storage::SessionStorage;

const AUTH_PATH: &str = "/auth/v1";
const REST_PATH: &str = "/rest/v1";
const FEED_CAPACITY: usize = 16;
