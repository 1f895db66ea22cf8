//! Session entity - an authenticated identity plus its credentials.

use crate::SessionUser;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DEFAULT_TOKEN_TYPE: &str = "bearer";

/// A session issued by the identity service.
///
/// Sessions are replaced wholesale; nothing in the dashboard ever merges two
/// sessions field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// End of the validity window, if the service reported one
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

fn default_token_type() -> String {
    String::from(DEFAULT_TOKEN_TYPE)
}

impl Session {
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    /// Check if the validity window has ended at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }

    /// Name shown in the user badge: full name if known, else the email.
    pub fn display_name(&self) -> &str {
        self.user
            .metadata
            .full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.user.email.as_deref())
            .unwrap_or_default()
    }

    /// First character of the display name, uppercased.
    pub fn initial(&self) -> Option<char> {
        self.display_name()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
    }
}
