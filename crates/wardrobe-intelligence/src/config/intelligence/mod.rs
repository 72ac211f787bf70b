// ABOUTME: Intelligence configuration for the outfit recommendation engine
// ABOUTME: Loads defaults, applies environment overrides, and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! # Module Structure
//!
//! - `recommendation` - Scoring adjustments for candidate items
//! - `weather` - Weather gates (temperature bands, rain, wind)
//! - `error` - Validation and parse errors
//!
//! Configuration is loaded explicitly by the caller and handed to the
//! recommender; there is no process-wide instance.

pub mod error;
pub mod recommendation;
pub mod weather;

pub use error::ConfigError;
pub use recommendation::{RecommendationEngineConfig, ScoringConfig};
pub use weather::WeatherGateConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;
use wardrobe_core::constants::warmth;

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for the outfit recommendation engine
    pub recommendation_engine: RecommendationEngineConfig,
}

impl IntelligenceConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the result fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if thresholds are out of order or values are out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let gates = &self.recommendation_engine.weather;
        if gates.cool_temp_celsius >= gates.mild_temp_celsius {
            return Err(ConfigError::InvalidRange(
                "cool_temp_celsius must be < mild_temp_celsius",
            ));
        }
        if gates.precipitation_threshold_mm < 0.0 || gates.wind_threshold_kph < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "precipitation and wind thresholds must be non-negative",
            ));
        }
        if gates.cold_required_warmth > warmth::MAX {
            return Err(ConfigError::ValueOutOfRange(
                "required warmth levels must be within 0-5",
            ));
        }
        if gates.mild_required_warmth > gates.cool_required_warmth
            || gates.cool_required_warmth > gates.cold_required_warmth
        {
            return Err(ConfigError::InvalidRange(
                "required warmth must not decrease as temperature drops",
            ));
        }

        let scoring = &self.recommendation_engine.scoring;
        if scoring.recency_window_days <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "recency_window_days must be positive",
            ));
        }
        if scoring.never_worn_days < scoring.recency_window_days {
            return Err(ConfigError::InvalidRange(
                "never_worn_days must be >= recency_window_days",
            ));
        }
        if scoring.recency_penalty_per_day < 0.0
            || scoring.avoid_tag_penalty < 0.0
            || scoring.warmth_match_bonus < 0.0
            || scoring.warmth_shortfall_penalty < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "scoring bonuses and penalties must be non-negative",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
            debug!(variable = env_var_name, value = %val, "Applied intelligence config override");
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let gates = &mut self.recommendation_engine.weather;
        Self::apply_env_var("WARDROBE_MILD_TEMP_C", &mut gates.mild_temp_celsius)?;
        Self::apply_env_var("WARDROBE_COOL_TEMP_C", &mut gates.cool_temp_celsius)?;
        Self::apply_env_var(
            "WARDROBE_PRECIP_THRESHOLD_MM",
            &mut gates.precipitation_threshold_mm,
        )?;
        Self::apply_env_var("WARDROBE_WIND_THRESHOLD_KPH", &mut gates.wind_threshold_kph)?;
        Self::apply_env_var(
            "WARDROBE_COOL_REQUIRED_WARMTH",
            &mut gates.cool_required_warmth,
        )?;
        Self::apply_env_var(
            "WARDROBE_COLD_REQUIRED_WARMTH",
            &mut gates.cold_required_warmth,
        )?;

        let scoring = &mut self.recommendation_engine.scoring;
        Self::apply_env_var("WARDROBE_BASE_SCORE", &mut scoring.base_score)?;
        Self::apply_env_var(
            "WARDROBE_RECENCY_WINDOW_DAYS",
            &mut scoring.recency_window_days,
        )?;
        Self::apply_env_var(
            "WARDROBE_RECENCY_PENALTY_PER_DAY",
            &mut scoring.recency_penalty_per_day,
        )?;
        Self::apply_env_var("WARDROBE_AVOID_TAG_PENALTY", &mut scoring.avoid_tag_penalty)?;
        Self::apply_env_var(
            "WARDROBE_WARMTH_MATCH_BONUS",
            &mut scoring.warmth_match_bonus,
        )?;
        Self::apply_env_var(
            "WARDROBE_WARMTH_SHORTFALL_PENALTY",
            &mut scoring.warmth_shortfall_penalty,
        )?;

        Ok(self)
    }
}
