use crate::config::environment::AppConfig;
use crate::module::error::endpoint_not_found;
use crate::module::{auth, currency, docs};
use crate::service::rate_service::build_http_client;
use axum::Router;
use reqwest::Client;
use tower_http::trace::TraceLayer;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub http: Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, String> {
        let http = build_http_client(config.rates_timeout_seconds)?;
        Ok(Self { config, http })
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(auth::route::register_routes(state.clone()))
        .merge(currency::route::register_routes(state.clone()))
        .merge(docs::route::register_routes(state))
        .fallback(endpoint_not_found)
        .layer(TraceLayer::new_for_http())
}
