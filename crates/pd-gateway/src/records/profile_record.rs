use crate::{GatewayError, GatewayResult};

use pd_core::{ColorTag, Profile, ProfileId};

use chrono::{DateTime, Utc};
use log::debug;
use serde::Deserialize;
use uuid::Uuid;

/// A row as the record store returns it.
///
/// Older rows use lowercase `name`/`url` columns; newer ones use `Name` and
/// `Link`. Both are read and the newer spelling wins.
#[derive(Debug, Deserialize)]
pub struct ProfileRecord {
    pub id: ProfileId,
    #[serde(default, rename = "Name")]
    pub name_column: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "Link")]
    pub link: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl ProfileRecord {
    /// Normalize into the canonical profile shape.
    ///
    /// An unknown color falls back to the default tag; a row with neither
    /// link column is rejected.
    pub fn into_profile(self) -> GatewayResult<Profile> {
        let url = self.link.or(self.url).ok_or_else(|| {
            GatewayError::record(format!("profile {} has no link column", self.id))
        })?;

        let color = match self.color.as_deref() {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                debug!("Profile {} has unknown color {raw:?}, using default", self.id);
                ColorTag::default()
            }),
            None => ColorTag::default(),
        };

        Ok(Profile {
            id: self.id,
            name: self.name_column.or(self.name).unwrap_or_default(),
            url,
            color,
            owner_id: self.user_id,
            created_at: self.created_at,
        })
    }
}
