use anyhow::{Context, Result};

use crate::diagnosis::store::DEFAULT_SESSION_TTL_SECS;

/// Application configuration loaded from environment variables.
/// Every backend is optional; unset ones fall back to in-process defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub database_url: Option<String>,
    pub redis_url: Option<String>,
    pub s3_bucket: Option<String>,
    pub s3_endpoint: Option<String>,
    pub aws_access_key_id: Option<String>,
    pub aws_secret_access_key: Option<String>,
    /// JSON catalog replacing the built-in tables.
    pub catalog_path: Option<String>,
    /// Pins the reason-template RNG. Unset means a fresh entropy seed per request.
    pub match_rng_seed: Option<u64>,
    pub session_ttl_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            redis_url: optional_env("REDIS_URL"),
            s3_bucket: optional_env("S3_BUCKET"),
            s3_endpoint: optional_env("S3_ENDPOINT"),
            aws_access_key_id: optional_env("AWS_ACCESS_KEY_ID"),
            aws_secret_access_key: optional_env("AWS_SECRET_ACCESS_KEY"),
            catalog_path: optional_env("CATALOG_PATH"),
            match_rng_seed: parse_env("MATCH_RNG_SEED")?,
            session_ttl_secs: parse_env("SESSION_TTL_SECS")?.unwrap_or(DEFAULT_SESSION_TTL_SECS),
            port: parse_env("PORT")?.unwrap_or(8080),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and blank values both read as `None`.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    optional_env(key)
        .map(|raw| {
            raw.parse::<T>()
                .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-global; each test uses its own variable names.

    #[test]
    fn test_optional_env_blank_is_none() {
        std::env::set_var("COMPASS_TEST_BLANK", "   ");
        assert_eq!(optional_env("COMPASS_TEST_BLANK"), None);
        assert_eq!(optional_env("COMPASS_TEST_NEVER_SET"), None);
    }

    #[test]
    fn test_parse_env_number() {
        std::env::set_var("COMPASS_TEST_SEED", "42");
        assert_eq!(parse_env::<u64>("COMPASS_TEST_SEED").unwrap(), Some(42));
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("COMPASS_TEST_PORT", "eighty");
        assert!(parse_env::<u16>("COMPASS_TEST_PORT").is_err());
    }
}
