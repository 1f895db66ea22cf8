mod models;

use crate::{ColorTag, Profile};

use chrono::{DateTime, TimeZone, Utc};

pub(crate) fn created(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::minutes(minutes)
}

pub(crate) fn profile(id: i64, name: &str) -> Profile {
    Profile {
        id,
        name: name.to_string(),
        url: format!("https://example.com/{id}"),
        color: ColorTag::default(),
        owner_id: None,
        created_at: created(id),
    }
}
