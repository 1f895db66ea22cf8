pub mod error;
pub mod models;
pub mod search;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::color_tag::ColorTag;
pub use models::new_profile::NewProfile;
pub use models::profile::{Profile, ProfileId};
pub use models::session::Session;
pub use models::session_user::{SessionUser, UserMetadata};
pub use search::{SearchSummary, filter_profiles, is_identity_query};
pub use validation::field_error::{FieldError, ProfileField};
pub use validation::field_errors::FieldErrors;
pub use validation::profile_form::{MIN_NAME_LENGTH, ProfileForm, validate_name, validate_url};
pub use validation::valid_profile::ValidProfile;
