pub mod auth_service;
pub mod rate_service;
