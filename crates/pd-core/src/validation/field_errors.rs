use crate::{FieldError, ProfileField};

/// At most one error per field. Both fields are always checked, so a single
/// validation pass can report name and url errors together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<FieldError>,
    url: Option<FieldError>,
}

impl FieldErrors {
    pub fn new(name: Option<FieldError>, url: Option<FieldError>) -> Self {
        Self { name, url }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.url.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn get(&self, field: ProfileField) -> Option<FieldError> {
        match field {
            ProfileField::Name => self.name,
            ProfileField::Url => self.url,
        }
    }

    pub fn name(&self) -> Option<FieldError> {
        self.name
    }

    pub fn url(&self) -> Option<FieldError> {
        self.url
    }

    /// Drop the error for one field (the user started editing it)
    pub fn clear(&mut self, field: ProfileField) {
        match field {
            ProfileField::Name => self.name = None,
            ProfileField::Url => self.url = None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.name.into_iter().chain(self.url)
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self
            .iter()
            .map(|error| format!("{}: {}", error.field(), error.message()))
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FieldErrors {}
