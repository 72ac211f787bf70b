// ABOUTME: Item scorer ranking wardrobe candidates for a single outfit slot
// ABOUTME: Applies recency, avoided-tag, and warmth-fit adjustments to a base score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Candidate scoring for the slot filler.
//!
//! Scores are pure functions of the item, the scoring context and the
//! configured adjustments. Higher is better.

use crate::config::intelligence::ScoringConfig;
use chrono::{DateTime, Utc};
use wardrobe_core::constants::MILLIS_PER_DAY;
use wardrobe_core::models::{Item, Preferences, WeatherSnapshot};

/// Inputs shared by every candidate scored within one recommendation
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    /// User preferences (only `avoid_tags` is read)
    pub preferences: &'a Preferences,
    /// Weather the outfit is for
    pub weather: &'a WeatherSnapshot,
    /// Minimum warmth for the current temperature
    pub required_warmth: u8,
    /// Clock used for recency
    pub now: DateTime<Utc>,
}

/// Scores candidate items
#[derive(Debug, Clone, Copy)]
pub struct ItemScorer<'c> {
    config: &'c ScoringConfig,
}

impl<'c> ItemScorer<'c> {
    /// Create a scorer over the given adjustments
    #[must_use]
    pub const fn new(config: &'c ScoringConfig) -> Self {
        Self { config }
    }

    /// Fractional days since the item was last worn, or the never-worn sentinel
    #[must_use]
    pub fn days_since_worn(&self, item: &Item, now: DateTime<Utc>) -> f64 {
        item.last_worn.map_or(self.config.never_worn_days, |worn| {
            (now - worn).num_milliseconds() as f64 / MILLIS_PER_DAY
        })
    }

    /// Suitability score for `item` in `ctx`
    #[must_use]
    pub fn score(&self, item: &Item, ctx: &ScoringContext<'_>) -> f64 {
        let mut score = self.config.base_score;

        let days_ago = self.days_since_worn(item, ctx.now);
        if days_ago < self.config.recency_window_days {
            score -= (self.config.recency_window_days - days_ago)
                * self.config.recency_penalty_per_day;
        }

        if item.has_any_tag(&ctx.preferences.avoid_tags) {
            score -= self.config.avoid_tag_penalty;
        }

        if let Some(warmth) = item.warmth {
            if warmth.value() >= ctx.required_warmth {
                score += self.config.warmth_match_bonus;
            } else {
                score -= self.config.warmth_shortfall_penalty;
            }
        }

        score
    }

    /// Highest-scoring candidate; the earliest candidate wins ties
    pub fn find_best_match<'i, I>(
        &self,
        candidates: I,
        ctx: &ScoringContext<'_>,
    ) -> Option<&'i Item>
    where
        I: IntoIterator<Item = &'i Item>,
    {
        let mut best: Option<(&'i Item, f64)> = None;
        for item in candidates {
            let score = self.score(item, ctx);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((item, score)),
            }
        }
        best.map(|(item, _)| item)
    }
}

/// Score an item with the default adjustments
#[must_use]
pub fn score_item(
    item: &Item,
    preferences: &Preferences,
    weather: &WeatherSnapshot,
    required_warmth: u8,
    now: DateTime<Utc>,
) -> f64 {
    let config = ScoringConfig::default();
    let ctx = ScoringContext {
        preferences,
        weather,
        required_warmth,
        now,
    };
    ItemScorer::new(&config).score(item, &ctx)
}
