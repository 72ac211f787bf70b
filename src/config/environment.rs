// ABOUTME: Environment configuration for database location and weather API settings
// ABOUTME: Reads environment variables with defaults and validates the parsed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;
use wardrobe_core::constants::cache::WEATHER_CACHE_EXPIRY_MINUTES;
use wardrobe_intelligence::IntelligenceConfig;

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL, e.g. `sqlite:./data/wardrobe.db` or `sqlite::memory:`
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: defaults::DATABASE_URL.to_owned(),
        }
    }
}

/// Weather API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    /// Base URL for the forecast API
    pub base_url: String,
    /// Request timeout (seconds)
    pub request_timeout_secs: u64,
    /// How long a cached snapshot stays usable (minutes)
    pub cache_expiry_minutes: i64,
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::WEATHER_API_BASE_URL.to_owned(),
            request_timeout_secs: defaults::WEATHER_REQUEST_TIMEOUT_SECS,
            cache_expiry_minutes: WEATHER_CACHE_EXPIRY_MINUTES,
        }
    }
}

impl WeatherApiConfig {
    /// Cache expiry as a duration
    #[must_use]
    pub fn cache_expiry(&self) -> Duration {
        Duration::minutes(self.cache_expiry_minutes)
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Storage settings
    pub database: DatabaseConfig,
    /// Weather API settings
    pub weather_api: WeatherApiConfig,
    /// Recommendation engine thresholds and scoring
    pub intelligence: IntelligenceConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or a value is out of range
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            database: DatabaseConfig {
                url: env_var_or("DATABASE_URL", defaults::DATABASE_URL),
            },
            weather_api: WeatherApiConfig {
                base_url: env_var_or("WEATHER_API_BASE_URL", defaults::WEATHER_API_BASE_URL),
                request_timeout_secs: parse_env_or(
                    "WEATHER_REQUEST_TIMEOUT_SECS",
                    defaults::WEATHER_REQUEST_TIMEOUT_SECS,
                )?,
                cache_expiry_minutes: parse_env_or(
                    "WEATHER_CACHE_EXPIRY_MINUTES",
                    WEATHER_CACHE_EXPIRY_MINUTES,
                )?,
            },
            intelligence: IntelligenceConfig::load()?,
        };

        config.validate()?;
        debug!(
            database_url = %config.database.url,
            weather_api = %config.weather_api.base_url,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Replace the database URL, e.g. from a CLI flag
    #[must_use]
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database.url = url.into();
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if timeouts or expiry are not positive or the URL is blank
    pub fn validate(&self) -> AppResult<()> {
        if self.database.url.trim().is_empty() {
            return Err(AppError::config("DATABASE_URL must not be empty"));
        }
        if self.weather_api.request_timeout_secs == 0 {
            return Err(AppError::config(
                "WEATHER_REQUEST_TIMEOUT_SECS must be positive",
            ));
        }
        if self.weather_api.cache_expiry_minutes <= 0 {
            return Err(AppError::config(
                "WEATHER_CACHE_EXPIRY_MINUTES must be positive",
            ));
        }
        self.intelligence.validate()?;
        Ok(())
    }
}

/// Get an environment variable or a default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env_or<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    env::var(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|_| AppError::config(format!("Invalid {key}: '{raw}'")))
    })
}
