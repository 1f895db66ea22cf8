pub mod http_auth_gateway;
pub mod http_profile_backend;
pub mod rest_client;
