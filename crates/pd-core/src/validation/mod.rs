pub mod field_error;
pub mod field_errors;
pub mod profile_form;
pub mod valid_profile;
