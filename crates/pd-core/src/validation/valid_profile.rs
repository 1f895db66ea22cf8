use crate::{ColorTag, NewProfile};

use uuid::Uuid;

/// Form values that passed validation, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProfile {
    name: String,
    url: String,
    color: ColorTag,
}

impl ValidProfile {
    pub(crate) fn new(name: String, url: String, color: ColorTag) -> Self {
        Self { name, url, color }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn color(&self) -> ColorTag {
        self.color
    }

    /// Attach the owner taken from the current session
    pub fn into_new_profile(self, owner_id: Uuid) -> NewProfile {
        NewProfile {
            name: self.name,
            url: self.url,
            color: self.color,
            owner_id,
        }
    }
}
