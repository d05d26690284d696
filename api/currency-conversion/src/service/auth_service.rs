use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub const TOKEN_TTL_SECONDS: i64 = 60 * 60;
const BEARER_PREFIX: &str = "Bearer ";
const IDENTITY_FIELDS: [&str; 2] = ["name", "surname"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Please send the Token in the Authorization Header.")]
    MissingToken,

    #[error("An error has ocurred while validating the Token: {0}")]
    InvalidToken(String),

    #[error("Please send the name and the surname of the User in the request.")]
    MissingFields,

    #[error("The request body must be a JSON object.")]
    InvalidPayload,

    #[error("token signing failed: {0}")]
    Signing(String),
}

/// How strict the gate is about headers and token request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthPolicy {
    /// Reject an `Authorization` header that does not start with `Bearer `.
    pub require_bearer_prefix: bool,
    /// Refuse to issue a token unless `name` and `surname` are supplied.
    pub require_identity_fields: bool,
}

impl Default for AuthPolicy {
    fn default() -> Self {
        Self {
            require_bearer_prefix: true,
            require_identity_fields: true,
        }
    }
}

/// Decoded token payload: whatever the client sent, plus issue and expiry times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub iat: i64,
    pub exp: i64,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

pub fn extract_bearer<'a>(header: Option<&'a str>, policy: &AuthPolicy) -> Result<&'a str, AuthError> {
    let header = header
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(AuthError::MissingToken)?;

    let token = match header.strip_prefix(BEARER_PREFIX) {
        Some(rest) => rest.trim(),
        None if policy.require_bearer_prefix => return Err(AuthError::MissingToken),
        None => header,
    };

    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}

pub fn issue_token(payload: &Value, secret: &str, policy: &AuthPolicy) -> Result<String, AuthError> {
    issue_token_at(payload, secret, policy, Utc::now().timestamp())
}

pub fn issue_token_at(
    payload: &Value,
    secret: &str,
    policy: &AuthPolicy,
    issued_at: i64,
) -> Result<String, AuthError> {
    let mut fields = match payload {
        Value::Object(map) => map.clone(),
        _ => return Err(AuthError::InvalidPayload),
    };

    if policy.require_identity_fields
        && !IDENTITY_FIELDS
            .iter()
            .all(|key| fields.get(*key).is_some_and(is_present))
    {
        return Err(AuthError::MissingFields);
    }

    fields.remove("iat");
    fields.remove("exp");
    let exp = issued_at
        .checked_add(TOKEN_TTL_SECONDS)
        .ok_or_else(|| AuthError::Signing("invalid token expiration".to_string()))?;
    let claims = Claims {
        iat: issued_at,
        exp,
        payload: fields,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::Signing(e.to_string()))
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_aud = false;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| AuthError::InvalidToken(e.to_string()))
}

// null, false, 0 and "" count as absent
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0),
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
