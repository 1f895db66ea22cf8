use pd_core::{Session, SessionUser};

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Session payload returned by the token and signup endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds from issue
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Absolute expiry as unix seconds
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: SessionUser,
}

impl TokenResponse {
    /// Build a session, resolving the expiry against `now` when only a
    /// lifetime was reported.
    pub fn into_session(self, now: DateTime<Utc>) -> Session {
        let expires_at = self
            .expires_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .or_else(|| {
                self.expires_in
                    .and_then(Duration::try_seconds)
                    .map(|lifetime| now + lifetime)
            });

        Session {
            user: self.user,
            access_token: self.access_token,
            refresh_token: self.refresh_token.filter(|token| !token.is_empty()),
            token_type: self
                .token_type
                .unwrap_or_else(|| String::from("bearer")),
            expires_at,
        }
    }
}

/// Signup answers with a full session when no confirmation is needed and
/// with the bare user otherwise.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignUpResponse {
    Session(TokenResponse),
    User(SessionUser),
}
