// ABOUTME: Recommendation engine configuration for outfit selection
// ABOUTME: Configures scoring adjustments and weather gates used by the slot filler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Engine Configuration
//!
//! Provides configuration for the outfit recommender: the scoring
//! adjustments applied to each candidate and the weather gates that decide
//! which slots are wanted.

use super::weather::WeatherGateConfig;
use serde::{Deserialize, Serialize};
use wardrobe_core::constants::scoring;

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEngineConfig {
    /// Candidate scoring adjustments
    pub scoring: ScoringConfig,
    /// Weather gates for slot decisions
    pub weather: WeatherGateConfig,
}

/// Adjustments applied to a candidate's base score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Score every candidate starts from
    pub base_score: f64,
    /// Items worn within this many days are penalized
    pub recency_window_days: f64,
    /// Penalty per day remaining in the recency window
    pub recency_penalty_per_day: f64,
    /// Days-ago value used for never-worn items
    pub never_worn_days: f64,
    /// Flat penalty for carrying any avoided tag
    pub avoid_tag_penalty: f64,
    /// Bonus for meeting the required warmth
    pub warmth_match_bonus: f64,
    /// Penalty for falling short of the required warmth
    pub warmth_shortfall_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: scoring::BASE_SCORE,
            recency_window_days: scoring::RECENCY_WINDOW_DAYS,
            recency_penalty_per_day: scoring::RECENCY_PENALTY_PER_DAY,
            never_worn_days: scoring::NEVER_WORN_DAYS,
            avoid_tag_penalty: scoring::AVOID_TAG_PENALTY,
            warmth_match_bonus: scoring::WARMTH_MATCH_BONUS,
            warmth_shortfall_penalty: scoring::WARMTH_SHORTFALL_PENALTY,
        }
    }
}
