use quick_xml::Reader;
use quick_xml::events::Event;
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

/// Every rate in the ECB sheet is quoted against one euro.
pub const BASE_CURRENCY: &str = "EUR";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateError {
    #[error("Please send a valid amount.")]
    InvalidAmount,

    #[error("The Currency ISO Code '{0}' was not found")]
    UnknownCurrency(String),

    #[error("Unable to load the conversion rates: {0}")]
    Upstream(String),
}

/// Rates for one publication day, keyed by ISO code.
///
/// The base currency is always present at exactly `1.0` and every other rate
/// is positive and finite. A table is never mutated once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    date: Option<String>,
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    pub fn from_rates<I, S>(date: Option<String>, rates: I) -> Result<Self, RateError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut table = BTreeMap::new();
        for (code, rate) in rates {
            let code = normalize_code(code.as_ref());
            if code.is_empty() {
                return Err(RateError::Upstream("rate entry has an empty currency code".to_string()));
            }
            if !rate.is_finite() || rate <= 0.0 {
                return Err(RateError::Upstream(format!("invalid rate for {code}: {rate}")));
            }
            table.insert(code, rate);
        }
        if table.is_empty() {
            return Err(RateError::Upstream("rate sheet contained no rates".to_string()));
        }
        table.insert(BASE_CURRENCY.to_string(), 1.0);
        Ok(Self { date, rates: table })
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn conversion_rate(&self, from: &str, to: &str) -> Result<f64, RateError> {
        let from_rate = self
            .rate(from)
            .ok_or_else(|| RateError::UnknownCurrency(from.to_string()))?;
        let to_rate = self
            .rate(to)
            .ok_or_else(|| RateError::UnknownCurrency(to.to_string()))?;
        Ok(to_rate / from_rate)
    }

    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, RateError> {
        Ok(amount * self.conversion_rate(from, to)?)
    }

    /// Converts `amount` into each target. An empty target list means every known code.
    pub fn convert_many(
        &self,
        amount: f64,
        from: &str,
        targets: &[String],
    ) -> Result<BTreeMap<String, f64>, RateError> {
        let mut out = BTreeMap::new();
        if targets.is_empty() {
            for code in self.codes() {
                out.insert(code.to_string(), self.convert(amount, from, code)?);
            }
        } else {
            for code in targets {
                out.insert(code.clone(), self.convert(amount, from, code)?);
            }
        }
        Ok(out)
    }
}

pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

pub fn build_http_client(timeout_seconds: u64) -> Result<Client, String> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
        .map_err(|e| format!("failed to build http client: {e}"))
}

pub async fn fetch_rates(client: &Client, source_url: &str) -> Result<RateTable, RateError> {
    let resp = client
        .get(source_url)
        .send()
        .await
        .map_err(|e| RateError::Upstream(format!("rate source request failed: {e}")))?;

    if !resp.status().is_success() {
        return Err(RateError::Upstream(format!(
            "rate source returned non-success status: {}",
            resp.status()
        )));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| RateError::Upstream(format!("failed to read rate source body: {e}")))?;

    parse_rate_sheet(&body)
}

/// Parses the ECB `eurofxref` envelope:
/// `gesmes:Envelope > Cube > Cube[time] > Cube[currency, rate]*`.
pub fn parse_rate_sheet(xml: &str) -> Result<RateTable, RateError> {
    let mut reader = Reader::from_str(xml);
    let mut date = None;
    let mut rates = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.local_name().as_ref() == b"Cube" => {
                let mut currency = None;
                let mut rate = None;
                for attr in e.attributes() {
                    let attr = attr.map_err(|e| {
                        RateError::Upstream(format!("malformed rate sheet attribute: {e}"))
                    })?;
                    let value = attr
                        .unescape_value()
                        .map_err(|e| {
                            RateError::Upstream(format!("malformed rate sheet attribute: {e}"))
                        })?
                        .into_owned();
                    match attr.key.local_name().as_ref() {
                        b"time" => date = Some(value),
                        b"currency" => currency = Some(value),
                        b"rate" => rate = Some(value),
                        _ => {}
                    }
                }
                match (currency, rate) {
                    (Some(code), Some(raw)) => {
                        let value = parse_rate(&code, &raw)?;
                        rates.push((code, value));
                    }
                    (None, None) => {}
                    (Some(code), None) => {
                        return Err(RateError::Upstream(format!("rate entry {code} has no rate")));
                    }
                    (None, Some(_)) => {
                        return Err(RateError::Upstream(
                            "rate entry has no currency code".to_string(),
                        ));
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(RateError::Upstream(format!(
                    "malformed rate sheet at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
        }
    }

    RateTable::from_rates(date, rates)
}

fn parse_rate(code: &str, raw: &str) -> Result<f64, RateError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| RateError::Upstream(format!("invalid rate for {code}: '{raw}'")))
}
