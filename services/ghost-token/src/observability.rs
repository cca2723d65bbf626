//! Tracing subscriber setup.

use crate::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Tracing configuration.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Service name recorded on startup
    pub service_name: String,
    /// Log level filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Whether to output JSON format
    pub json_output: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            service_name: "ghost-token-service".to_string(),
            log_level: "info".to_string(),
            json_output: true,
        }
    }
}

impl TracingConfig {
    /// Build from the service configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            log_level: config.log_level.clone(),
            json_output: config.log_json,
            ..Self::default()
        }
    }
}

/// Initialize the global tracing subscriber. Call once at startup.
pub fn init_tracing(config: &TracingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TracingConfig::default();
        assert_eq!(config.service_name, "ghost-token-service");
        assert_eq!(config.log_level, "info");
        assert!(config.json_output);
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout: std::time::Duration::from_secs(10),
            log_level: "debug".to_string(),
            log_json: false,
        };
        let tracing_config = TracingConfig::from_config(&config);

        assert_eq!(tracing_config.service_name, "ghost-token-service");
        assert_eq!(tracing_config.log_level, "debug");
        assert!(!tracing_config.json_output);
    }
}
