//! Profile entity - a named external link shown on the dashboard.

use crate::ColorTag;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned by the record store on insert.
pub type ProfileId = i64;

/// Canonical profile shape. Every record read from the store is normalized
/// into this struct at the gateway boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub url: String,
    pub color: ColorTag,
    /// Rows written before ownership was recorded carry no owner
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Case-insensitive substring match on the name.
    ///
    /// `lowered_query` must already be lowercase.
    pub fn name_contains(&self, lowered_query: &str) -> bool {
        self.name.to_lowercase().contains(lowered_query)
    }

    /// Check if the profile belongs to the given user
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == Some(user_id)
    }
}
