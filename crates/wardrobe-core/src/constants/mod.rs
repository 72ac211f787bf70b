// ABOUTME: Default thresholds and scoring constants for outfit recommendation
// ABOUTME: Weather gates, required warmth levels, and item scoring adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants used as defaults by the recommendation engine configuration.
//!
//! The engine reads these through `RecommendationEngineConfig`, so changing a
//! value here only changes the default, not a runtime override.

/// Temperature thresholds that drive outerwear and warmth decisions
pub mod weather_thresholds {
    /// At or above this temperature no minimum warmth is required
    pub const MILD_TEMP_CELSIUS: f64 = 16.0;
    /// At or above this temperature (and below mild) light warmth is required
    pub const COOL_TEMP_CELSIUS: f64 = 8.0;
    /// Precipitation at or above this amount counts as rain
    pub const PRECIPITATION_THRESHOLD_MM: f64 = 1.0;
    /// Wind at or above this speed counts as windy
    pub const WIND_THRESHOLD_KPH: f64 = 25.0;
}

/// Required warmth level for each temperature band
pub mod required_warmth {
    /// Mild and warm weather
    pub const MILD: u8 = 0;
    /// Cool weather (between cool and mild thresholds)
    pub const COOL: u8 = 1;
    /// Cold weather (below the cool threshold)
    pub const COLD: u8 = 3;
}

/// Item scoring adjustments
pub mod scoring {
    /// Score every candidate starts from
    pub const BASE_SCORE: f64 = 100.0;
    /// Items worn within this many days are penalized
    pub const RECENCY_WINDOW_DAYS: f64 = 7.0;
    /// Penalty per day remaining in the recency window
    pub const RECENCY_PENALTY_PER_DAY: f64 = 10.0;
    /// Days-ago value used for items that were never worn
    pub const NEVER_WORN_DAYS: f64 = 999.0;
    /// Flat penalty when an item carries any avoided tag
    pub const AVOID_TAG_PENALTY: f64 = 50.0;
    /// Bonus when an item is warm enough for the conditions
    pub const WARMTH_MATCH_BONUS: f64 = 10.0;
    /// Penalty when an item is not warm enough for the conditions
    pub const WARMTH_SHORTFALL_PENALTY: f64 = 20.0;
}

/// Warmth rating bounds
pub mod warmth {
    /// Lowest warmth rating
    pub const MIN: u8 = 0;
    /// Highest warmth rating
    pub const MAX: u8 = 5;
}

/// Weather cache policy
pub mod cache {
    /// Cached weather older than this is treated as absent
    pub const WEATHER_CACHE_EXPIRY_MINUTES: i64 = 60;
}

/// Milliseconds in one day, used for fractional day arithmetic
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;
