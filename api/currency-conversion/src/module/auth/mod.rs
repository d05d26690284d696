pub mod controller;
pub mod crud;
pub mod extractor;
pub mod route;
