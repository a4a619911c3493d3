use crate::core::telemetry::{self, LogFormat};
use crate::core::timezone;
use crate::core::{AppError, Result};
use std::env;

pub mod display;

pub use display::DisplayConfig;

/// Main library configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            app: AppConfig {
                env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                log_format: lookup("LOG_FORMAT")
                    .unwrap_or_else(|| "pretty".to_string())
                    .parse()
                    .map_err(|_| AppError::configuration("Invalid LOG_FORMAT"))?,
            },
            display: DisplayConfig::from_vars(&lookup)?,
        };

        Ok(config)
    }

    /// Install the tracing subscriber described by `LOG_LEVEL` / `LOG_FORMAT`
    pub fn init_tracing(&self) -> Result<()> {
        telemetry::init_tracing(&self.app.log_level, self.app.log_format)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.display.date_format.trim().is_empty() {
            return Err(AppError::configuration(
                "Line item date format cannot be empty",
            ));
        }

        if !timezone::is_valid_date_format(&self.display.date_format) {
            return Err(AppError::configuration(format!(
                "Invalid line item date format: {}",
                self.display.date_format
            )));
        }

        if self.app.log_level.trim().is_empty() {
            return Err(AppError::configuration("Log level cannot be empty"));
        }

        Ok(())
    }
}
