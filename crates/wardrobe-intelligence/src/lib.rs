// ABOUTME: Outfit intelligence for the wardrobe platform
// ABOUTME: Item scoring, weather-gated slot filling, explanations, and swap utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wardrobe Intelligence
//!
//! The recommendation engine is synchronous, performs no I/O and does not
//! log; callers load state and hand it in.
//!
//! ## Modules
//!
//! - **config**: Weather gates and scoring adjustments with env overrides
//! - **scoring**: Per-item suitability scores and best-match selection
//! - **recommendation_engine**: Slot filling and outfit assembly
//! - **explanation**: Human-readable explanation text
//! - **swap**: Post-hoc item replacement, including the random laundry swap

/// Engine configuration (weather gates, scoring adjustments)
pub mod config;

/// Explanation text assembly
pub mod explanation;

/// Outfit recommender
pub mod recommendation_engine;

/// Candidate item scoring
pub mod scoring;

/// Outfit item swaps
pub mod swap;

pub use config::intelligence::{
    ConfigError, IntelligenceConfig, RecommendationEngineConfig, ScoringConfig, WeatherGateConfig,
};
pub use explanation::{ExplanationBuilder, SelectionReason};
pub use recommendation_engine::{recommend, OutfitRecommender, Selection, WeatherAssessment};
pub use scoring::{score_item, ItemScorer, ScoringContext};
pub use swap::{alternatives_for, laundry_swap, swap_item, SwapError};
