//! Server settings, read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `DATABASE_URL` | required |
//! | `API_HOST` | `0.0.0.0` |
//! | `API_PORT` | `3000` |
//! | `LOG_LEVEL` | `info`, unknown levels fall back to it |
//! | `API_CORS_ORIGINS` | unset, comma-separated when given |
//! | `API_REQUEST_TIMEOUT_SECONDS` | `30`, after which a request answers `REQUEST/TIMEOUT` |

use eyre::{Result, WrapErr, eyre};
use std::env;
use tracing::Level;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub log_level: Level,
    /// `None` leaves the API without a CORS layer.
    pub cors_origins: Option<Vec<String>>,
    /// Seconds.
    pub request_timeout: u64,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| eyre!("DATABASE_URL must point at the planning database"))?;

        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("API_PORT") {
            Some(raw) => raw
                .parse()
                .wrap_err_with(|| format!("Invalid API_PORT value: {}", raw))?,
            None => 3000,
        };

        let log_level = lookup("LOG_LEVEL")
            .and_then(|level| level.parse().ok())
            .unwrap_or(Level::INFO);

        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect()
        });

        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|seconds| seconds.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
        })
    }

    /// `host:port`, as handed to the listener.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
