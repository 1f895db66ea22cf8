use crate::{ColorTag, FieldError, FieldErrors, ValidProfile};

use url::Url;

/// Minimum number of characters in a trimmed profile name
pub const MIN_NAME_LENGTH: usize = 2;

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub url: String,
    pub color: ColorTag,
}

impl ProfileForm {
    pub fn new(name: impl Into<String>, url: impl Into<String>, color: ColorTag) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            color,
        }
    }

    /// Check both fields. Neither check short-circuits the other.
    pub fn validate(&self) -> Result<ValidProfile, FieldErrors> {
        let errors = FieldErrors::new(validate_name(&self.name), validate_url(&self.url));

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidProfile::new(
            self.name.trim().to_string(),
            self.url.trim().to_string(),
            self.color,
        ))
    }
}

pub fn validate_name(name: &str) -> Option<FieldError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Some(FieldError::NameRequired);
    }
    if trimmed.chars().count() < MIN_NAME_LENGTH {
        return Some(FieldError::NameTooShort);
    }

    None
}

pub fn validate_url(url: &str) -> Option<FieldError> {
    let trimmed = url.trim();

    if trimmed.is_empty() {
        return Some(FieldError::UrlRequired);
    }

    match Url::parse(trimmed) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => None,
        Ok(_) => Some(FieldError::UrlScheme),
        Err(_) => Some(FieldError::UrlMalformed),
    }
}
