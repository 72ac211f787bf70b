// ABOUTME: Outfit recommendation engine selecting one item per slot for the weather
// ABOUTME: Fills outerwear, main garment, shoes, and accessory slots, then explains the picks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Outfit recommendation engine
//!
//! The recommender is a pure function of (wardrobe, preferences, weather).
//! Slots are filled in a fixed order; each step that finds no candidate is
//! skipped, and the call only fails when nothing at all could be selected.

use crate::config::intelligence::RecommendationEngineConfig;
use crate::explanation::{ExplanationBuilder, SelectionReason};
use crate::scoring::{ItemScorer, ScoringContext};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use uuid::Uuid;
use wardrobe_core::errors::RecommendationError;
use wardrobe_core::models::{
    Category, Item, Outfit, OutfitItem, OutfitSlot, Preferences, WeatherSnapshot,
};

/// Weather facts derived once per recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherAssessment {
    /// Minimum warmth for the temperature
    pub required_warmth: u8,
    /// Precipitation crossed the rain threshold
    pub has_precip: bool,
    /// Wind crossed the wind threshold
    pub has_wind: bool,
    /// Temperature alone calls for outerwear
    pub wants_outerwear: bool,
}

impl WeatherAssessment {
    /// Assess a snapshot against the configured gates
    #[must_use]
    pub fn assess(weather: &WeatherSnapshot, config: &RecommendationEngineConfig) -> Self {
        let gates = &config.weather;
        Self {
            required_warmth: gates.required_warmth(weather.temp_c),
            has_precip: gates.has_precipitation(weather.precip_mm),
            has_wind: gates.is_windy(weather.wind_kph),
            wants_outerwear: gates.wants_outerwear(weather.temp_c),
        }
    }
}

/// One filled slot
#[derive(Debug, Clone, Copy)]
pub struct SlotPick<'a> {
    /// Slot filled
    pub slot: OutfitSlot,
    /// Item placed in it
    pub item: &'a Item,
    /// Why it was chosen
    pub reason: SelectionReason,
}

/// Slot assignments before an id and timestamp are attached
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    /// Weather facts the picks were made under
    pub assessment: WeatherAssessment,
    /// Picks in selection order
    pub picks: Vec<SlotPick<'a>>,
    /// Assembled explanation text
    pub explanation: String,
}

/// Per-call slot filling state; the used set never outlives one recommendation
struct SlotFiller<'a, 'c> {
    available: Vec<&'a Item>,
    scorer: ItemScorer<'c>,
    ctx: ScoringContext<'a>,
    used: HashSet<&'a str>,
    picks: Vec<SlotPick<'a>>,
}

impl<'a, 'c> SlotFiller<'a, 'c> {
    /// Pick the best unused item of `category` that passes `eligible`
    fn fill<F>(
        &mut self,
        slot: OutfitSlot,
        category: Category,
        reason: SelectionReason,
        eligible: F,
    ) -> bool
    where
        F: Fn(&Item) -> bool,
    {
        let used = &self.used;
        let candidates = self
            .available
            .iter()
            .copied()
            .filter(|item| item.category == category)
            .filter(|item| !used.contains(item.id.as_str()))
            .filter(|item| eligible(item));

        let Some(best) = self.scorer.find_best_match(candidates, &self.ctx) else {
            return false;
        };

        self.used.insert(best.id.as_str());
        self.picks.push(SlotPick {
            slot,
            item: best,
            reason,
        });
        true
    }

    fn fill_outerwear(&mut self, assessment: WeatherAssessment) {
        let mut needs_outerwear = assessment.wants_outerwear;

        if assessment.has_precip
            && self.fill(
                OutfitSlot::Outerwear,
                Category::Outerwear,
                SelectionReason::RainProtection,
                |item| item.waterproof,
            )
        {
            needs_outerwear = false;
        }

        if needs_outerwear
            && assessment.has_wind
            && self.fill(
                OutfitSlot::Outerwear,
                Category::Outerwear,
                SelectionReason::WindProtection,
                |item| item.windproof,
            )
        {
            needs_outerwear = false;
        }

        if needs_outerwear {
            let required = assessment.required_warmth;
            self.fill(
                OutfitSlot::Outerwear,
                Category::Outerwear,
                SelectionReason::Warmth,
                |item| item.warmth.map_or(0, |w| w.value()) >= required,
            );
        }
    }

    fn fill_main_garment(&mut self) {
        let has_dress = self.fill(
            OutfitSlot::Dress,
            Category::Dress,
            SelectionReason::Plain,
            |_| true,
        );
        if !has_dress {
            self.fill(OutfitSlot::Top, Category::Top, SelectionReason::Plain, |_| {
                true
            });
            self.fill(
                OutfitSlot::Bottom,
                Category::Bottom,
                SelectionReason::Plain,
                |_| true,
            );
        }
    }

    fn fill_shoes(&mut self, has_precip: bool) {
        let reason = if has_precip {
            SelectionReason::WaterResistant
        } else {
            SelectionReason::Plain
        };
        self.fill(OutfitSlot::Shoes, Category::Shoes, reason, |item| {
            !has_precip || item.waterproof
        });
    }

    fn fill_accessory(&mut self) {
        self.fill(
            OutfitSlot::Accessory,
            Category::Accessory,
            SelectionReason::Plain,
            |_| true,
        );
    }
}

/// Weather-aware outfit recommender
#[derive(Debug, Clone, Default)]
pub struct OutfitRecommender {
    config: RecommendationEngineConfig,
}

impl OutfitRecommender {
    /// Create a recommender with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recommender with custom configuration
    #[must_use]
    pub const fn with_config(config: RecommendationEngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &RecommendationEngineConfig {
        &self.config
    }

    /// Recommend an outfit using the current time for recency and the timestamp
    ///
    /// # Errors
    ///
    /// Returns `EmptyWardrobe` when no non-archived items exist and
    /// `IncompleteOutfit` when no slot could be filled
    pub fn recommend(
        &self,
        items: &[Item],
        preferences: &Preferences,
        weather: &WeatherSnapshot,
    ) -> Result<Outfit, RecommendationError> {
        self.recommend_at(items, preferences, weather, Utc::now())
    }

    /// Recommend an outfit against an explicit clock
    ///
    /// # Errors
    ///
    /// Returns `EmptyWardrobe` when no non-archived items exist and
    /// `IncompleteOutfit` when no slot could be filled
    pub fn recommend_at(
        &self,
        items: &[Item],
        preferences: &Preferences,
        weather: &WeatherSnapshot,
        now: DateTime<Utc>,
    ) -> Result<Outfit, RecommendationError> {
        let selection = self.select(items, preferences, weather, now)?;

        Ok(Outfit {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            explanation: selection.explanation,
            items: selection
                .picks
                .iter()
                .map(|pick| OutfitItem {
                    slot: pick.slot,
                    item_id: pick.item.id.clone(),
                })
                .collect(),
            weather: weather.clone(),
        })
    }

    /// Run slot filling and explanation without minting an outfit
    ///
    /// # Errors
    ///
    /// Returns `EmptyWardrobe` when no non-archived items exist and
    /// `IncompleteOutfit` when no slot could be filled
    pub fn select<'a>(
        &self,
        items: &'a [Item],
        preferences: &'a Preferences,
        weather: &'a WeatherSnapshot,
        now: DateTime<Utc>,
    ) -> Result<Selection<'a>, RecommendationError> {
        let available: Vec<&Item> = items.iter().filter(|item| item.is_active()).collect();
        if available.is_empty() {
            return Err(RecommendationError::EmptyWardrobe);
        }

        let assessment = WeatherAssessment::assess(weather, &self.config);
        let mut filler = SlotFiller {
            available,
            scorer: ItemScorer::new(&self.config.scoring),
            ctx: ScoringContext {
                preferences,
                weather,
                required_warmth: assessment.required_warmth,
                now,
            },
            used: HashSet::new(),
            picks: Vec::new(),
        };

        filler.fill_outerwear(assessment);
        filler.fill_main_garment();
        filler.fill_shoes(assessment.has_precip);
        filler.fill_accessory();

        if filler.picks.is_empty() {
            return Err(RecommendationError::IncompleteOutfit);
        }

        let mut explanation = ExplanationBuilder::with_weather(
            weather.temp_c,
            assessment.has_precip,
            assessment.has_wind,
        );
        for pick in &filler.picks {
            explanation.push_item(&pick.item.name, pick.reason);
        }

        Ok(Selection {
            assessment,
            picks: filler.picks,
            explanation: explanation.build(),
        })
    }
}

/// Recommend an outfit with the default configuration
///
/// # Errors
///
/// Returns `EmptyWardrobe` when no non-archived items exist and
/// `IncompleteOutfit` when no slot could be filled
pub fn recommend(
    items: &[Item],
    preferences: &Preferences,
    weather: &WeatherSnapshot,
) -> Result<Outfit, RecommendationError> {
    OutfitRecommender::new().recommend(items, preferences, weather)
}
