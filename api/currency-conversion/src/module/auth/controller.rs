use super::crud;
use crate::app::AppState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, info};

pub async fn issue_token(State(state): State<AppState>, body: Bytes) -> Response {
    match crud::issue_token(&state.config, &body) {
        Ok(resp) => {
            info!("token issued");
            (StatusCode::OK, Json(resp)).into_response()
        }
        Err(err) => {
            error!(error_code = err.code, reason = %err.message, "token request rejected");
            err.into_response()
        }
    }
}
