// ABOUTME: Application-level constants for the wardrobe CLI and services
// ABOUTME: Service names, environment defaults, and unit conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Engine thresholds live in `wardrobe_core::constants`; this module holds
//! the values only the application layer needs.

/// Service names used in structured logs
pub mod service_names {
    /// Command-line front end
    pub const WARDROBE_CLI: &str = "wardrobe-cli";
}

/// Defaults applied when environment variables are unset
pub mod defaults {
    /// `SQLite` database location
    pub const DATABASE_URL: &str = "sqlite:./data/wardrobe.db";
    /// Open-Meteo forecast API
    pub const WEATHER_API_BASE_URL: &str = "https://api.open-meteo.com";
    /// Per-request timeout for weather calls
    pub const WEATHER_REQUEST_TIMEOUT_SECS: u64 = 10;
    /// Connect timeout for weather calls
    pub const WEATHER_CONNECT_TIMEOUT_SECS: u64 = 5;
}

/// Unit conversions
pub mod units {
    /// Meters per second to kilometers per hour
    pub const MS_TO_KMH_FACTOR: f64 = 3.6;
}
