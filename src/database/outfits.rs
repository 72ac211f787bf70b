// ABOUTME: Outfit database operations for saved recommendations
// ABOUTME: Stores slot assignments and the weather snapshot as JSON text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{from_millis, to_millis, Database};
use crate::errors::{AppError, AppResult};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;
use wardrobe_core::models::Outfit;

impl Database {
    /// Create outfits table
    pub(super) async fn migrate_outfits(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS outfits (
                id TEXT PRIMARY KEY NOT NULL,
                created_at INTEGER NOT NULL,
                explanation TEXT NOT NULL,
                items TEXT NOT NULL,
                weather TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_outfits_created ON outfits(created_at)")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Insert an outfit, replacing any stored outfit with the same id
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub async fn save_outfit(&self, outfit: &Outfit) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT OR REPLACE INTO outfits (id, created_at, explanation, items, weather)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(&outfit.id)
        .bind(to_millis(outfit.created_at))
        .bind(&outfit.explanation)
        .bind(serde_json::to_string(&outfit.items)?)
        .bind(serde_json::to_string(&outfit.weather)?)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save outfit: {e}")))?;

        debug!(outfit_id = %outfit.id, items = outfit.items.len(), "Outfit saved");
        Ok(())
    }

    /// Get an outfit by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    pub async fn get_outfit(&self, id: &str) -> AppResult<Option<Outfit>> {
        let row = sqlx::query(
            "SELECT id, created_at, explanation, items, weather FROM outfits WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get outfit: {e}")))?;

        row.as_ref().map(row_to_outfit).transpose()
    }

    /// Most recently created outfit
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    pub async fn get_latest_outfit(&self) -> AppResult<Option<Outfit>> {
        let row = sqlx::query(
            r"
            SELECT id, created_at, explanation, items, weather
            FROM outfits
            ORDER BY created_at DESC
            LIMIT 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get latest outfit: {e}")))?;

        row.as_ref().map(row_to_outfit).transpose()
    }

    /// Outfits newest first, at most `limit`
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn list_outfits(&self, limit: u32) -> AppResult<Vec<Outfit>> {
        let rows = sqlx::query(
            r"
            SELECT id, created_at, explanation, items, weather
            FROM outfits
            ORDER BY created_at DESC
            LIMIT ?1
            ",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list outfits: {e}")))?;

        rows.iter().map(row_to_outfit).collect()
    }

    /// Delete an outfit
    ///
    /// # Errors
    ///
    /// Returns an error if the outfit does not exist or the delete fails
    pub async fn delete_outfit(&self, id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM outfits WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete outfit: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Outfit {id}")));
        }
        Ok(())
    }
}

fn row_to_outfit(row: &SqliteRow) -> AppResult<Outfit> {
    let items: String = row.try_get("items")?;
    let weather: String = row.try_get("weather")?;

    Ok(Outfit {
        id: row.try_get("id")?,
        created_at: from_millis(row.try_get("created_at")?)?,
        explanation: row.try_get("explanation")?,
        items: serde_json::from_str(&items)?,
        weather: serde_json::from_str(&weather)?,
    })
}
