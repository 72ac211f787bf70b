// ABOUTME: Repository trait the outfit service uses to load and persist wardrobe state
// ABOUTME: SQLite implementation delegates to the Database operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Database;
use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use wardrobe_core::models::{Item, Outfit, Preferences, WeatherSnapshot};

/// Storage capabilities needed to produce and record a daily outfit
#[async_trait]
pub trait WardrobeRepository: Send + Sync {
    /// Non-archived items, newest first
    async fn list_active_items(&self) -> AppResult<Vec<Item>>;

    /// Item by id, archived or not
    async fn get_item(&self, id: &str) -> AppResult<Option<Item>>;

    /// Current preferences (defaults if never saved)
    async fn get_preferences(&self) -> AppResult<Preferences>;

    /// Cached weather if no older than `max_age` at `now`
    async fn get_cached_weather(
        &self,
        now: DateTime<Utc>,
        max_age: Duration,
    ) -> AppResult<Option<WeatherSnapshot>>;

    /// Replace the cached weather
    async fn save_weather(&self, weather: &WeatherSnapshot) -> AppResult<()>;

    /// Persist an outfit
    async fn save_outfit(&self, outfit: &Outfit) -> AppResult<()>;

    /// Outfit by id
    async fn get_outfit(&self, id: &str) -> AppResult<Option<Outfit>>;

    /// Set `last_worn` on every listed item in one transaction
    async fn mark_items_worn(&self, ids: &[String], when: DateTime<Utc>) -> AppResult<()>;
}

#[async_trait]
impl WardrobeRepository for Database {
    async fn list_active_items(&self) -> AppResult<Vec<Item>> {
        Self::list_active_items(self).await
    }

    async fn get_item(&self, id: &str) -> AppResult<Option<Item>> {
        Self::get_item(self, id).await
    }

    async fn get_preferences(&self) -> AppResult<Preferences> {
        Self::get_preferences(self).await
    }

    async fn get_cached_weather(
        &self,
        now: DateTime<Utc>,
        max_age: Duration,
    ) -> AppResult<Option<WeatherSnapshot>> {
        self.get_fresh_weather(now, max_age).await
    }

    async fn save_weather(&self, weather: &WeatherSnapshot) -> AppResult<()> {
        Self::save_weather(self, weather).await
    }

    async fn save_outfit(&self, outfit: &Outfit) -> AppResult<()> {
        Self::save_outfit(self, outfit).await
    }

    async fn get_outfit(&self, id: &str) -> AppResult<Option<Outfit>> {
        Self::get_outfit(self, id).await
    }

    async fn mark_items_worn(&self, ids: &[String], when: DateTime<Utc>) -> AppResult<()> {
        Self::mark_items_worn(self, ids, when).await
    }
}
