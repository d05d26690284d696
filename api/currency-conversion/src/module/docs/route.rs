use super::controller;
use crate::app::AppState;
use crate::module::error::endpoint_not_found;
use axum::Router;
use axum::routing::get;

pub fn register_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/docs",
            get(controller::get_openapi_document).fallback(endpoint_not_found),
        )
        .with_state(state)
}
