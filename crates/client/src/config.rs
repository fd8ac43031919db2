use chrono_tz::Tz;
use eyre::{Result, eyre};
use std::env;

/// Configuration of the planning client.
///
/// Read from `PLANNING_API_URL` (default `http://localhost:3000`) and
/// `PLANNING_TIMEZONE`, an IANA zone name such as `Europe/Paris`
/// (default `UTC`).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the planning API, without the `/api/v1` prefix
    pub api_url: String,
    /// Zone in which weeks and days are computed
    pub timezone: Tz,
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup("PLANNING_API_URL")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        let timezone = lookup("PLANNING_TIMEZONE")
            .unwrap_or_else(|| "UTC".to_string())
            .parse::<Tz>()
            .map_err(|e| eyre!("Invalid PLANNING_TIMEZONE value: {}", e))?;

        Ok(Self { api_url, timezone })
    }
}
