pub mod auth;
pub mod currency;
pub mod docs;
pub mod error;
