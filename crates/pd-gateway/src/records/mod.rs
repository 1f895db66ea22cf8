pub mod api_error_body;
pub mod new_profile_record;
pub mod profile_record;
pub mod token_response;
