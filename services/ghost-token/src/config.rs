//! Centralized configuration for the Ghost Token Service.
//!
//! Configuration is loaded from environment variables (optionally via a
//! `.env` file) and validated at startup. Token lifetime and audience are
//! fixed by the issuer and are not configurable here.

use crate::error::TokenError;
use std::env;
use std::time::Duration;

/// Ghost Token Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    // Server settings
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Per-request timeout applied by the HTTP layer
    pub request_timeout: Duration,

    // Logging
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON log lines
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, TokenError> {
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_env("PORT", 3000)?;
        let request_timeout = Duration::from_secs(parse_env("REQUEST_TIMEOUT_SECS", 10)?);

        if request_timeout.is_zero() {
            return Err(TokenError::config("REQUEST_TIMEOUT_SECS must be positive"));
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_json = parse_env("LOG_JSON", true)?;

        Ok(Self {
            host,
            port,
            request_timeout,
            log_level,
            log_json,
        })
    }

    /// `host:port` string for binding.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse environment variable with default value.
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, TokenError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| TokenError::config(format!("Invalid {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
