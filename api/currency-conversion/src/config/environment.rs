use crate::service::auth_service::AuthPolicy;
use std::env;

pub const DEFAULT_RATES_SOURCE_URL: &str =
    "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-daily.xml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rust_env: String,
    pub api_host: String,
    pub api_port: u16,
    pub jwt_secret: String,
    pub rates_source_url: String,
    pub rates_timeout_seconds: u64,
    pub auth_policy: AuthPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        load_dotenv_layers();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| "missing required env var: JWT_KEY".to_string())?;

        let rates_timeout_seconds = read_optional_u64(&lookup, "RATES_TIMEOUT_SECONDS", 10)?;
        if rates_timeout_seconds == 0 {
            return Err("RATES_TIMEOUT_SECONDS must be positive".to_string());
        }

        Ok(Self {
            rust_env: read_optional_string(&lookup, "RUST_ENV", "development"),
            api_host: read_optional_string(&lookup, "API_HOST", "0.0.0.0"),
            api_port: match lookup("PORT") {
                Some(v) => v
                    .trim()
                    .parse::<u16>()
                    .map_err(|e| format!("invalid PORT: {e}"))?,
                None => 3000,
            },
            jwt_secret,
            rates_source_url: read_optional_string(
                &lookup,
                "RATES_SOURCE_URL",
                DEFAULT_RATES_SOURCE_URL,
            ),
            rates_timeout_seconds,
            auth_policy: AuthPolicy {
                require_bearer_prefix: read_optional_bool(&lookup, "REQUIRE_BEARER_PREFIX", true),
                require_identity_fields: read_optional_bool(
                    &lookup,
                    "REQUIRE_IDENTITY_FIELDS",
                    true,
                ),
            },
        })
    }
}

fn read_optional_u64<F>(lookup: &F, key: &str, default: u64) -> Result<u64, String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) => v
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("invalid {key}: {e}")),
        None => Ok(default),
    }
}

fn read_optional_bool<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) => matches!(v.trim(), "1" | "true" | "TRUE" | "yes" | "YES"),
        None => default,
    }
}

fn read_optional_string<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn load_dotenv_layers() {
    for path in [".env", "../.env", "../../.env"] {
        let _ = dotenvy::from_path(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_secret_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[("JWT_KEY", "s3cret")]))
            .expect("config");
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.api_port, 3000);
        assert_eq!(config.api_host, "0.0.0.0");
        assert_eq!(config.rates_source_url, DEFAULT_RATES_SOURCE_URL);
        assert_eq!(config.rates_timeout_seconds, 10);
        assert!(config.auth_policy.require_bearer_prefix);
        assert!(config.auth_policy.require_identity_fields);
    }

    #[test]
    fn missing_or_blank_secret_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[])).expect_err("must fail");
        assert!(err.contains("JWT_KEY"));
        let err = AppConfig::from_lookup(lookup_from(&[("JWT_KEY", "  ")])).expect_err("must fail");
        assert!(err.contains("JWT_KEY"));
    }

    #[test]
    fn port_and_policy_flags_are_read() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("JWT_KEY", "k"),
            ("PORT", "8081"),
            ("REQUIRE_BEARER_PREFIX", "false"),
            ("REQUIRE_IDENTITY_FIELDS", "0"),
        ]))
        .expect("config");
        assert_eq!(config.api_port, 8081);
        assert!(!config.auth_policy.require_bearer_prefix);
        assert!(!config.auth_policy.require_identity_fields);
    }

    #[test]
    fn invalid_port_and_zero_timeout_are_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("JWT_KEY", "k"), ("PORT", "http")]))
            .expect_err("must fail");
        assert!(err.starts_with("invalid PORT"));
        let err = AppConfig::from_lookup(lookup_from(&[
            ("JWT_KEY", "k"),
            ("RATES_TIMEOUT_SECONDS", "0"),
        ]))
        .expect_err("must fail");
        assert!(err.contains("RATES_TIMEOUT_SECONDS"));
    }
}
