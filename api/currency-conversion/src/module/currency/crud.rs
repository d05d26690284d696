use super::model::ConversionRequest;
use super::schema::{ConversionPath, ConversionQuery, ConversionRates};
use crate::app::AppState;
use crate::module::error::AppError;
use crate::service::rate_service::{self, BASE_CURRENCY, RateError, normalize_code};
use tracing::debug;

pub fn request_from_query(query: &ConversionQuery) -> Result<ConversionRequest, RateError> {
    Ok(ConversionRequest {
        amount: parse_amount(query.amount.as_deref())?,
        from: parse_source(query.from.as_deref()),
        targets: parse_targets(query.to.as_deref()),
    })
}

/// The path variant always converts a single unit.
pub fn request_from_path(path: &ConversionPath) -> ConversionRequest {
    ConversionRequest {
        amount: 1.0,
        from: parse_source(Some(path.from.as_str())),
        targets: parse_targets(path.to.as_deref()),
    }
}

pub async fn convert(state: &AppState, req: &ConversionRequest) -> Result<ConversionRates, AppError> {
    let table = rate_service::fetch_rates(&state.http, &state.config.rates_source_url).await?;
    debug!(date = ?table.date(), codes = table.len(), "rate sheet loaded");
    Ok(table.convert_many(req.amount, &req.from, &req.targets)?)
}

pub fn parse_amount(raw: Option<&str>) -> Result<f64, RateError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(1.0),
        Some(v) => v
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or(RateError::InvalidAmount),
    }
}

pub fn parse_source(raw: Option<&str>) -> String {
    match raw.map(normalize_code).filter(|code| !code.is_empty()) {
        Some(code) => code,
        None => BASE_CURRENCY.to_string(),
    }
}

pub fn parse_targets(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(normalize_code)
        .filter(|code| !code.is_empty())
        .collect()
}
