use super::controller;
use crate::app::AppState;
use crate::module::error::endpoint_not_found;
use axum::Router;
use axum::routing::post;

pub fn register_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/token",
            post(controller::issue_token).fallback(endpoint_not_found),
        )
        .with_state(state)
}
