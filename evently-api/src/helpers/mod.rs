pub mod auth;
pub mod space_resolver;
