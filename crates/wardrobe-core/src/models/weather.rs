// ABOUTME: Point-in-time weather reading used as recommendation input
// ABOUTME: Immutable snapshot; freshness is decided by the storage layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::ValidationError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Normalized weather snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// When the reading was taken
    pub taken_at: DateTime<Utc>,
    /// Latitude, rounded to two decimals
    pub lat: f64,
    /// Longitude, rounded to two decimals
    pub lon: f64,
    /// City label, when known
    #[serde(default)]
    pub city: Option<String>,
    /// Current temperature in Celsius
    pub temp_c: f64,
    /// Daily minimum in Celsius
    pub temp_min_c: f64,
    /// Daily maximum in Celsius
    pub temp_max_c: f64,
    /// Apparent temperature in Celsius
    pub feels_like_c: f64,
    /// Wind speed in km/h
    pub wind_kph: f64,
    /// Precipitation in millimeters
    pub precip_mm: f64,
    /// Condition label ("Rain", "Clear", ...)
    pub condition: String,
}

impl WeatherSnapshot {
    /// Build a snapshot from the fields the engine reads; min/max/feels-like
    /// default to the current temperature
    #[must_use]
    pub fn new(temp_c: f64, precip_mm: f64, wind_kph: f64, condition: impl Into<String>) -> Self {
        Self {
            taken_at: Utc::now(),
            lat: 0.0,
            lon: 0.0,
            city: None,
            temp_c,
            temp_min_c: temp_c,
            temp_max_c: temp_c,
            feels_like_c: temp_c,
            wind_kph,
            precip_mm,
            condition: condition.into(),
        }
    }

    /// Whether the snapshot is older than `max_age` at `now`
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        now - self.taken_at > max_age
    }

    /// Check the non-negative measurements
    ///
    /// # Errors
    ///
    /// Returns an error if wind or precipitation is negative
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.precip_mm < 0.0 {
            return Err(ValidationError::Negative {
                field: "precip_mm",
                value: self.precip_mm,
            });
        }
        if self.wind_kph < 0.0 {
            return Err(ValidationError::Negative {
                field: "wind_kph",
                value: self.wind_kph,
            });
        }
        if self.condition.trim().is_empty() {
            return Err(ValidationError::EmptyField("condition"));
        }
        Ok(())
    }
}
