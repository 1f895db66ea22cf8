pub mod color_tag;
pub mod new_profile;
pub mod profile;
pub mod session;
pub mod session_user;
