use super::controller;
use crate::app::AppState;
use crate::module::error::endpoint_not_found;
use axum::Router;
use axum::routing::get;

pub fn register_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/currencies",
            get(controller::get_conversion_rates).fallback(endpoint_not_found),
        )
        .route(
            "/currencies/:from",
            get(controller::get_conversion_rates_by_path).fallback(endpoint_not_found),
        )
        .route(
            "/currencies/:from/:to",
            get(controller::get_conversion_rates_by_path).fallback(endpoint_not_found),
        )
        .with_state(state)
}
