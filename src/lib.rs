// ABOUTME: Main library entry point for the wardrobe outfit engine
// ABOUTME: Wires storage, weather integration and the recommender into daily outfit workflows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wardrobe Engine
//!
//! Weather-aware daily outfit recommendations over a locally stored wardrobe.
//!
//! ## Features
//!
//! - **Wardrobe storage**: Items, preferences, settings and outfit history in `SQLite`
//! - **Weather cache**: Open-Meteo snapshots cached with an expiry window
//! - **Recommender**: Slot filling and scoring from `wardrobe-intelligence`
//! - **Swaps**: Random laundry swaps and manual replacements on saved outfits
//!
//! ## Architecture
//!
//! - **`wardrobe-core`**: Models, validation and error types
//! - **`wardrobe-intelligence`**: Pure recommendation, scoring and swap logic
//! - **This crate**: Database, weather client, services and the `wardrobe-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use wardrobe_engine::config::AppConfig;
//! use wardrobe_engine::database::Database;
//! use wardrobe_engine::errors::AppResult;
//! use wardrobe_engine::services::OutfitService;
//! use wardrobe_intelligence::OutfitRecommender;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let database = Database::new(&config.database.url).await?;
//!     let recommender =
//!         OutfitRecommender::with_config(config.intelligence.recommendation_engine.clone());
//!     let service =
//!         OutfitService::new(database, recommender, config.weather_api.cache_expiry());
//!
//!     let outfit = service.recommend_today().await?;
//!     println!("{}", outfit.explanation);
//!     Ok(())
//! }
//! ```

/// Environment-driven application configuration
pub mod config;

/// Application constants and defaults
pub mod constants;

/// `SQLite` persistence for the wardrobe
pub mod database;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Multi-step outfit workflows
pub mod services;

/// Weather providers and cache refresh
pub mod weather;
