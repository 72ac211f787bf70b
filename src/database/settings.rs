// ABOUTME: Application settings database operations for the singleton settings row
// ABOUTME: Stores location mode, manual location, and onboarding state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Database;
use crate::errors::{AppError, AppResult};
use sqlx::Row;
use wardrobe_core::models::AppSettings;

impl Database {
    /// Create settings table
    pub(super) async fn migrate_settings(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS settings (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                location_mode TEXT NOT NULL DEFAULT 'gps',
                manual_city TEXT,
                manual_lat REAL,
                manual_lon REAL,
                onboarding_completed INTEGER NOT NULL DEFAULT 0
            )
            ",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Get application settings, storing defaults on first read
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row cannot be decoded
    pub async fn get_settings(&self) -> AppResult<AppSettings> {
        let row = sqlx::query(
            r"
            SELECT location_mode, manual_city, manual_lat, manual_lon, onboarding_completed
            FROM settings
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get settings: {e}")))?;

        let Some(row) = row else {
            let defaults = AppSettings::default();
            self.save_settings(&defaults).await?;
            return Ok(defaults);
        };

        let location_mode: String = row.try_get("location_mode")?;
        Ok(AppSettings {
            location_mode: location_mode.parse()?,
            manual_city: row.try_get("manual_city")?,
            manual_lat: row.try_get("manual_lat")?,
            manual_lon: row.try_get("manual_lon")?,
            onboarding_completed: row.try_get("onboarding_completed")?,
        })
    }

    /// Replace application settings
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn save_settings(&self, settings: &AppSettings) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT OR REPLACE INTO settings (
                id, location_mode, manual_city, manual_lat, manual_lon, onboarding_completed
            ) VALUES (1, ?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(settings.location_mode.as_str())
        .bind(&settings.manual_city)
        .bind(settings.manual_lat)
        .bind(settings.manual_lon)
        .bind(settings.onboarding_completed)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save settings: {e}")))?;
        Ok(())
    }
}
