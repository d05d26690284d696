use crate::config::environment::AppConfig;
use crate::module::error::{AppError, DetailResponse};
use crate::service::auth_service;
use serde_json::{Map, Value};

pub fn issue_token(config: &AppConfig, body: &[u8]) -> Result<DetailResponse, AppError> {
    let payload = parse_payload(body).map_err(generation_error)?;
    let token = auth_service::issue_token(&payload, &config.jwt_secret, &config.auth_policy)
        .map_err(|e| generation_error(e.into()))?;
    Ok(DetailResponse::new(token))
}

/// An empty body is an empty object.
fn parse_payload(body: &[u8]) -> Result<Value, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::not_found("INVALID_PAYLOAD", format!("invalid json body: {e}")))
}

fn generation_error(err: AppError) -> AppError {
    AppError {
        message: format!(
            "An error has ocurred while generating the Token: {}",
            err.message
        ),
        ..err
    }
}
