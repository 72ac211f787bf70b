// ABOUTME: Preferences database operations for the singleton styling record
// ABOUTME: Reading an empty table stores and returns the default preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Database;
use crate::errors::{AppError, AppResult};
use sqlx::Row;
use std::collections::BTreeSet;
use tracing::debug;
use wardrobe_core::models::{DressCode, Preferences};

impl Database {
    /// Create preferences table
    pub(super) async fn migrate_preferences(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS preferences (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                style_preference TEXT NOT NULL,
                fit TEXT NOT NULL,
                dress_codes TEXT NOT NULL,
                avoid_tags TEXT,
                color_palette TEXT NOT NULL DEFAULT 'neutral',
                formality_level INTEGER NOT NULL DEFAULT 3,
                units TEXT NOT NULL DEFAULT 'metric'
            )
            ",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Get the user's preferences, storing defaults on first read
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row cannot be decoded
    pub async fn get_preferences(&self) -> AppResult<Preferences> {
        let row = sqlx::query(
            r"
            SELECT style_preference, fit, dress_codes, avoid_tags, color_palette,
                   formality_level, units
            FROM preferences
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get preferences: {e}")))?;

        let Some(row) = row else {
            let defaults = Preferences::default();
            self.save_preferences(&defaults).await?;
            debug!("Stored default preferences");
            return Ok(defaults);
        };

        let style: String = row.try_get("style_preference")?;
        let fit: String = row.try_get("fit")?;
        let dress_codes: String = row.try_get("dress_codes")?;
        let avoid_tags: Option<String> = row.try_get("avoid_tags")?;
        let formality_level: i64 = row.try_get("formality_level")?;
        let units: String = row.try_get("units")?;

        Ok(Preferences {
            style_preference: style.parse()?,
            fit: fit.parse()?,
            dress_codes: serde_json::from_str::<Vec<DressCode>>(&dress_codes)?,
            avoid_tags: avoid_tags
                .as_deref()
                .map(serde_json::from_str::<BTreeSet<String>>)
                .transpose()?
                .unwrap_or_default(),
            color_palette: row.try_get("color_palette")?,
            formality_level: u8::try_from(formality_level).map_err(|_| {
                AppError::database(format!("Invalid stored formality level: {formality_level}"))
            })?,
            units: units.parse()?,
        })
    }

    /// Replace the user's preferences
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub async fn save_preferences(&self, preferences: &Preferences) -> AppResult<()> {
        let avoid_tags = if preferences.avoid_tags.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&preferences.avoid_tags)?)
        };

        sqlx::query(
            r"
            INSERT OR REPLACE INTO preferences (
                id, style_preference, fit, dress_codes, avoid_tags, color_palette,
                formality_level, units
            ) VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ",
        )
        .bind(preferences.style_preference.as_str())
        .bind(preferences.fit.as_str())
        .bind(serde_json::to_string(&preferences.dress_codes)?)
        .bind(avoid_tags)
        .bind(&preferences.color_palette)
        .bind(i64::from(preferences.formality_level))
        .bind(preferences.units.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save preferences: {e}")))?;

        Ok(())
    }
}
