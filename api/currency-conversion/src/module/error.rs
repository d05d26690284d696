use crate::service::auth_service::AuthError;
use crate::service::rate_service::RateError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Body shared by token responses and every error response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl AppError {
    pub fn unauthorized(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            code,
            message: message.into(),
        }
    }

    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code,
            message: message.into(),
        }
    }
}

impl From<RateError> for AppError {
    fn from(err: RateError) -> Self {
        let code = match &err {
            RateError::InvalidAmount => "INVALID_AMOUNT",
            RateError::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            RateError::Upstream(_) => "UPSTREAM_ERROR",
        };
        Self::not_found(code, err.to_string())
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match &err {
            AuthError::MissingToken => Self::unauthorized("MISSING_TOKEN", err.to_string()),
            AuthError::InvalidToken(_) => Self::unauthorized("INVALID_TOKEN", err.to_string()),
            AuthError::MissingFields => Self::not_found("MISSING_FIELDS", err.to_string()),
            AuthError::InvalidPayload => Self::not_found("INVALID_PAYLOAD", err.to_string()),
            AuthError::Signing(_) => Self::not_found("TOKEN_SIGNING_FAILED", err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(DetailResponse::new(self.message))).into_response()
    }
}

pub async fn endpoint_not_found() -> AppError {
    AppError::not_found("ENDPOINT_NOT_FOUND", "Endpoint not found")
}
