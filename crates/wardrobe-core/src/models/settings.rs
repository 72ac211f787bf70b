// ABOUTME: Application settings singleton (location source, onboarding state)
// ABOUTME: Consumed by the CLI to decide where weather is fetched for
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Where the weather location comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationMode {
    /// Device position
    #[default]
    Gps,
    /// User-entered coordinates
    Manual,
}

impl LocationMode {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gps => "gps",
            Self::Manual => "manual",
        }
    }
}

impl FromStr for LocationMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gps" => Ok(Self::Gps),
            "manual" => Ok(Self::Manual),
            other => Err(ValidationError::unknown_variant("location mode", other)),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    /// Location source
    pub location_mode: LocationMode,
    /// City label for manual mode
    pub manual_city: Option<String>,
    /// Latitude for manual mode
    pub manual_lat: Option<f64>,
    /// Longitude for manual mode
    pub manual_lon: Option<f64>,
    /// Whether first-run setup finished
    pub onboarding_completed: bool,
}

impl AppSettings {
    /// Manual coordinates, when both are set
    #[must_use]
    pub fn manual_coordinates(&self) -> Option<(f64, f64)> {
        self.manual_lat.zip(self.manual_lon)
    }
}
