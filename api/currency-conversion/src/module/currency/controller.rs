use super::crud;
use super::model::ConversionRequest;
use super::schema::{ConversionPath, ConversionQuery};
use crate::app::AppState;
use crate::module::auth::extractor::AuthenticatedUser;
use crate::module::error::AppError;
use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, info};

pub async fn get_conversion_rates(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    query: Result<Query<ConversionQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return error_conversion(AppError::not_found("INVALID_QUERY", e.body_text())),
    };
    info!(
        amount = ?query.amount,
        from = ?query.from,
        to = ?query.to,
        subject = ?claims.payload.get("name"),
        "conversion requested"
    );

    match crud::request_from_query(&query) {
        Ok(req) => respond(&state, req).await,
        Err(err) => error_conversion(err.into()),
    }
}

pub async fn get_conversion_rates_by_path(
    State(state): State<AppState>,
    path: Result<Path<ConversionPath>, PathRejection>,
) -> Response {
    let Path(path) = match path {
        Ok(p) => p,
        Err(e) => return error_conversion(AppError::not_found("INVALID_PATH", e.body_text())),
    };
    info!(from = %path.from, to = ?path.to, "conversion requested");

    respond(&state, crud::request_from_path(&path)).await
}

async fn respond(state: &AppState, req: ConversionRequest) -> Response {
    match crud::convert(state, &req).await {
        Ok(rates) => (StatusCode::OK, Json(rates)).into_response(),
        Err(err) => error_conversion(err),
    }
}

fn error_conversion(err: AppError) -> Response {
    error!(error_code = err.code, reason = %err.message, "conversion rejected");
    err.into_response()
}
