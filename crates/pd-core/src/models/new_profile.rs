use crate::ColorTag;

use serde::Serialize;
use uuid::Uuid;

/// Fields sent to the record store when creating a profile.
///
/// Only produced from a [`crate::ValidProfile`], so name and url are already
/// trimmed and checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProfile {
    pub name: String,
    pub url: String,
    pub color: ColorTag,
    pub owner_id: Uuid,
}
