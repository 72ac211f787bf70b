// ABOUTME: Daily outfit orchestration over the wardrobe repository
// ABOUTME: Loads items, preferences and cached weather, persists outfits, and records wear
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database::WardrobeRepository;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::{info, warn};
use wardrobe_core::models::Outfit;
use wardrobe_intelligence::{laundry_swap, swap_item, OutfitRecommender};

/// Produces, swaps and records daily outfits
pub struct OutfitService<R> {
    repository: R,
    recommender: OutfitRecommender,
    weather_max_age: Duration,
}

impl<R: WardrobeRepository> OutfitService<R> {
    /// Create a service over `repository`
    ///
    /// Cached weather older than `weather_max_age` is treated as missing.
    #[must_use]
    pub const fn new(
        repository: R,
        recommender: OutfitRecommender,
        weather_max_age: Duration,
    ) -> Self {
        Self {
            repository,
            recommender,
            weather_max_age,
        }
    }

    /// Underlying repository
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Recommend, persist and record today's outfit
    ///
    /// # Errors
    ///
    /// Returns `WeatherUnavailable` without fresh cached weather, the
    /// recommender's errors, or any storage failure
    pub async fn recommend_today(&self) -> AppResult<Outfit> {
        self.recommend_today_at(Utc::now()).await
    }

    /// [`Self::recommend_today`] against an explicit clock
    ///
    /// # Errors
    ///
    /// Returns `WeatherUnavailable` without fresh cached weather, the
    /// recommender's errors, or any storage failure
    pub async fn recommend_today_at(&self, now: DateTime<Utc>) -> AppResult<Outfit> {
        let weather = self
            .repository
            .get_cached_weather(now, self.weather_max_age)
            .await?
            .ok_or_else(|| {
                AppError::weather_unavailable("Refresh the weather before asking for an outfit")
            })?;
        let items = self.repository.list_active_items().await?;
        let preferences = self.repository.get_preferences().await?;

        let outfit = self
            .recommender
            .recommend_at(&items, &preferences, &weather, now)?;

        self.repository.save_outfit(&outfit).await?;
        let worn: Vec<String> = outfit
            .items
            .iter()
            .map(|entry| entry.item_id.clone())
            .collect();
        self.repository.mark_items_worn(&worn, now).await?;

        info!(
            outfit_id = %outfit.id,
            item_count = outfit.items.len(),
            temp_c = weather.temp_c,
            "Outfit recommended"
        );
        Ok(outfit)
    }

    /// Replace an item with a random alternative and persist the outfit
    ///
    /// Wear history is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown outfit or when no
    /// alternative exists, `InvalidInput` when the item is not in the outfit
    pub async fn laundry_swap<G>(
        &self,
        outfit_id: &str,
        item_id: &str,
        rng: &mut G,
    ) -> AppResult<Outfit>
    where
        G: Rng + ?Sized,
    {
        let outfit = self.load_outfit(outfit_id).await?;
        let wardrobe = self.repository.list_active_items().await?;

        let swapped = laundry_swap(&outfit, item_id, &wardrobe, rng).map_err(|e| {
            warn!(outfit_id, item_id, error = %e, "Laundry swap failed");
            AppError::from(e)
        })?;

        self.repository.save_outfit(&swapped).await?;
        info!(outfit_id, item_id, "Laundry swap applied");
        Ok(swapped)
    }

    /// Replace an item with a chosen item of the same category and persist the outfit
    ///
    /// Wear history is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown outfit or replacement,
    /// `InvalidInput` when the replacement is archived, in the wrong
    /// category, or the item is not in the outfit
    pub async fn swap_item(
        &self,
        outfit_id: &str,
        item_id: &str,
        replacement_id: &str,
    ) -> AppResult<Outfit> {
        let outfit = self.load_outfit(outfit_id).await?;
        let replacement = self
            .repository
            .get_item(replacement_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Item {replacement_id}")))?;

        if !replacement.is_active() {
            return Err(AppError::invalid_input(format!(
                "Item {replacement_id} is archived"
            ))
            .with_resource_id(replacement_id));
        }

        let swapped = swap_item(&outfit, item_id, &replacement)?;
        self.repository.save_outfit(&swapped).await?;
        info!(outfit_id, item_id, replacement_id, "Item swapped");
        Ok(swapped)
    }

    async fn load_outfit(&self, outfit_id: &str) -> AppResult<Outfit> {
        self.repository
            .get_outfit(outfit_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Outfit {outfit_id}")))
    }
}
