use crate::app::AppState;
use crate::module::error::AppError;
use crate::service::auth_service::{self, AuthError, Claims};
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::warn;

/// Claims of a caller that presented a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        authenticate(parts, state).map(Self).map_err(|err| {
            let err = AppError::from(err);
            warn!(error_code = err.code, reason = %err.message, path = %parts.uri.path(), "authentication rejected");
            err
        })
    }
}

fn authenticate(parts: &Parts, state: &AppState) -> Result<Claims, AuthError> {
    let header = match parts.headers.get(AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| {
            AuthError::InvalidToken("authorization header is not valid ascii".to_string())
        })?),
        None => None,
    };
    let token = auth_service::extract_bearer(header, &state.config.auth_policy)?;
    auth_service::verify_token(token, &state.config.jwt_secret)
}
