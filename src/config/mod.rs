// ABOUTME: Configuration module for the wardrobe application
// ABOUTME: Re-exports environment-driven database, weather, and engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration is environment-only. [`AppConfig::from_env`] reads the
//! database and weather settings and delegates engine thresholds to
//! [`wardrobe_intelligence::IntelligenceConfig::load`].

/// Environment configuration
pub mod environment;

pub use environment::{AppConfig, DatabaseConfig, WeatherApiConfig};
