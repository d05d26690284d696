use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query string of `GET /currencies`. Values stay raw so bad input maps to a detail message.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConversionQuery {
    pub amount: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConversionPath {
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
}

/// ISO code to converted amount.
pub type ConversionRates = BTreeMap<String, f64>;
