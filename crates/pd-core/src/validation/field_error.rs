/// Form field a validation error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Url,
}

/// Field-level validation failure. Recoverable by the user editing the field;
/// never reaches the remote layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    NameRequired,
    NameTooShort,
    UrlRequired,
    UrlMalformed,
    UrlScheme,
}

impl FieldError {
    pub fn field(&self) -> ProfileField {
        match self {
            Self::NameRequired | Self::NameTooShort => ProfileField::Name,
            Self::UrlRequired | Self::UrlMalformed | Self::UrlScheme => ProfileField::Url,
        }
    }

    /// Message shown next to the field
    pub fn message(&self) -> &'static str {
        match self {
            Self::NameRequired => "Name is required",
            Self::NameTooShort => "Name must be at least 2 characters",
            Self::UrlRequired => "URL is required",
            Self::UrlMalformed => "Please enter a valid URL (include http:// or https://)",
            Self::UrlScheme => "URL must start with http:// or https://",
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Url => write!(f, "url"),
        }
    }
}
