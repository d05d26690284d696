use super::openapi;
use crate::app::AppState;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

pub async fn get_openapi_document(State(state): State<AppState>) -> impl IntoResponse {
    Json(openapi::document(&state.config))
}
