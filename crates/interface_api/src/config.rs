//! API configuration

use core_kernel::Timezone;
use serde::Deserialize;
use std::path::PathBuf;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Directory holding the document-store exports (movements.json,
    /// inventory.json, warehouses.json)
    pub data_dir: PathBuf,
    /// Timezone movements are bucketed in
    pub reporting_timezone: String,
    /// Currency code reported alongside aggregated amounts
    pub reporting_currency: String,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            data_dir: PathBuf::from("./data"),
            reporting_timezone: "Europe/Madrid".to_string(),
            reporting_currency: "EUR".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("TANUKI"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed reporting timezone; an unknown name falls back to UTC with a
    /// warning rather than refusing to start.
    pub fn timezone(&self) -> Timezone {
        self.reporting_timezone.parse().unwrap_or_else(|_| {
            tracing::warn!(
                timezone = %self.reporting_timezone,
                "unknown reporting timezone, falling back to UTC"
            );
            Timezone::default()
        })
    }
}
