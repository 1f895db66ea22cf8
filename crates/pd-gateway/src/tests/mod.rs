mod profile_record;
mod session_feed;

use pd_core::{Session, SessionUser, UserMetadata};

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

pub(crate) const USER_ID: &str = "6b1c3c9e-8a5e-4c1e-9f44-3f1f0d6f2a10";

pub(crate) fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, hour, 0, 0).unwrap()
}

pub(crate) fn session(token: &str) -> Session {
    Session {
        user: SessionUser {
            id: Uuid::parse_str(USER_ID).unwrap(),
            email: Some(String::from("ada@example.com")),
            metadata: UserMetadata::default(),
        },
        access_token: token.to_string(),
        refresh_token: Some(format!("{token}-refresh")),
        token_type: String::from("bearer"),
        expires_at: Some(at(12)),
    }
}
