pub mod controller;
pub mod openapi;
pub mod route;
