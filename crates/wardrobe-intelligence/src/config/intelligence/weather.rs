// ABOUTME: Weather gate configuration for outerwear and warmth decisions
// ABOUTME: Configures temperature bands, rain and wind thresholds, and required warmth levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weather Gate Configuration
//!
//! Maps a weather snapshot onto the decisions the slot filler makes:
//! how warm items need to be, whether it is raining, whether it is windy,
//! and whether outerwear is wanted at all.

use serde::{Deserialize, Serialize};
use wardrobe_core::constants::{required_warmth, weather_thresholds};

/// Weather Gate Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherGateConfig {
    /// At or above this temperature no warmth is required and outerwear is not wanted
    pub mild_temp_celsius: f64,
    /// At or above this temperature (below mild) light warmth is required
    pub cool_temp_celsius: f64,
    /// Precipitation at or above this amount counts as rain
    pub precipitation_threshold_mm: f64,
    /// Wind at or above this speed counts as windy
    pub wind_threshold_kph: f64,
    /// Required warmth in mild weather
    pub mild_required_warmth: u8,
    /// Required warmth in cool weather
    pub cool_required_warmth: u8,
    /// Required warmth in cold weather
    pub cold_required_warmth: u8,
}

impl Default for WeatherGateConfig {
    fn default() -> Self {
        Self {
            mild_temp_celsius: weather_thresholds::MILD_TEMP_CELSIUS,
            cool_temp_celsius: weather_thresholds::COOL_TEMP_CELSIUS,
            precipitation_threshold_mm: weather_thresholds::PRECIPITATION_THRESHOLD_MM,
            wind_threshold_kph: weather_thresholds::WIND_THRESHOLD_KPH,
            mild_required_warmth: required_warmth::MILD,
            cool_required_warmth: required_warmth::COOL,
            cold_required_warmth: required_warmth::COLD,
        }
    }
}

impl WeatherGateConfig {
    /// Minimum warmth rating for the temperature (step function)
    #[must_use]
    pub fn required_warmth(&self, temp_c: f64) -> u8 {
        if temp_c >= self.mild_temp_celsius {
            self.mild_required_warmth
        } else if temp_c >= self.cool_temp_celsius {
            self.cool_required_warmth
        } else {
            self.cold_required_warmth
        }
    }

    /// Whether the precipitation counts as rain
    #[must_use]
    pub fn has_precipitation(&self, precip_mm: f64) -> bool {
        precip_mm >= self.precipitation_threshold_mm
    }

    /// Whether the wind counts as windy
    #[must_use]
    pub fn is_windy(&self, wind_kph: f64) -> bool {
        wind_kph >= self.wind_threshold_kph
    }

    /// Whether the temperature alone calls for outerwear
    #[must_use]
    pub fn wants_outerwear(&self, temp_c: f64) -> bool {
        temp_c < self.mild_temp_celsius
    }
}
