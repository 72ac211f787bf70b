// ABOUTME: Core types and constants for the wardrobe outfit engine
// ABOUTME: Foundation crate with wardrobe models, domain errors, and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wardrobe Core
//!
//! Foundation crate providing the shared domain types for the wardrobe
//! platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **models**: `Item`, `Preferences`, `WeatherSnapshot`, `Outfit` and their enums
//! - **errors**: Domain errors raised by the recommender and model validation
//! - **constants**: Default thresholds and scoring values for outfit recommendation

/// Domain error types (recommendation failures, validation failures)
pub mod errors;

/// Default thresholds and scoring values organized by concern
pub mod constants;

/// Wardrobe data models (items, preferences, weather, outfits, settings)
pub mod models;
