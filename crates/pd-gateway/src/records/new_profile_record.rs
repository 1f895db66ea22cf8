use pd_core::NewProfile;

use serde::Serialize;
use uuid::Uuid;

/// Row inserted into the profiles table. Column names follow the table.
#[derive(Debug, Serialize)]
pub struct NewProfileRecord<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Link")]
    pub link: &'a str,
    pub color: &'static str,
    pub user_id: Uuid,
}

impl<'a> From<&'a NewProfile> for NewProfileRecord<'a> {
    fn from(profile: &'a NewProfile) -> Self {
        Self {
            name: &profile.name,
            link: &profile.url,
            color: profile.color.as_str(),
            user_id: profile.owner_id,
        }
    }
}
