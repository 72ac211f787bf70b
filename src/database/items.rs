// ABOUTME: Wardrobe item database operations
// ABOUTME: Create, read, update, archive, delete, wear tracking, and search for items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{from_millis, to_millis, Database};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use std::collections::BTreeSet;
use tracing::debug;
use wardrobe_core::models::{Category, Item, Warmth};

const ITEM_COLUMNS: &str = "id, created_at, updated_at, name, photo_uri, category, subcategory, \
    colors, fabric, warmth, waterproof, windproof, tags, seasons, formal_level, cost, last_worn, archived";

impl Database {
    /// Create items table
    pub(super) async fn migrate_items(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS items (
                id TEXT PRIMARY KEY NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                name TEXT NOT NULL,
                photo_uri TEXT,
                category TEXT NOT NULL,
                subcategory TEXT,
                colors TEXT NOT NULL DEFAULT '[]',
                fabric TEXT,
                warmth INTEGER CHECK (warmth IS NULL OR (warmth >= 0 AND warmth <= 5)),
                waterproof INTEGER NOT NULL DEFAULT 0,
                windproof INTEGER NOT NULL DEFAULT 0,
                tags TEXT,
                seasons TEXT NOT NULL DEFAULT '[]',
                formal_level INTEGER,
                cost REAL,
                last_worn INTEGER,
                archived INTEGER NOT NULL DEFAULT 0
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_items_active ON items(archived, created_at)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new item
    ///
    /// # Errors
    ///
    /// Returns an error if the item fails validation or the insert fails
    pub async fn create_item(&self, item: &Item) -> AppResult<()> {
        item.validate()?;

        sqlx::query(
            r"
            INSERT INTO items (
                id, created_at, updated_at, name, photo_uri, category, subcategory,
                colors, fabric, warmth, waterproof, windproof, tags, seasons,
                formal_level, cost, last_worn, archived
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)
            ",
        )
        .bind(&item.id)
        .bind(to_millis(item.created_at))
        .bind(to_millis(item.updated_at))
        .bind(&item.name)
        .bind(&item.photo_uri)
        .bind(item.category.as_str())
        .bind(&item.subcategory)
        .bind(serde_json::to_string(&item.colors)?)
        .bind(&item.fabric)
        .bind(item.warmth.map(|w| i64::from(w.value())))
        .bind(item.waterproof)
        .bind(item.windproof)
        .bind(encode_tags(&item.tags)?)
        .bind(serde_json::to_string(&item.seasons)?)
        .bind(item.formal_level.map(i64::from))
        .bind(item.cost)
        .bind(item.last_worn.map(to_millis))
        .bind(item.archived)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create item: {e}")))?;

        debug!(item_id = %item.id, category = %item.category, "Item created");
        Ok(())
    }

    /// Get an item by id, archived or not
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    pub async fn get_item(&self, id: &str) -> AppResult<Option<Item>> {
        let row = sqlx::query(&format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get item: {e}")))?;

        row.as_ref().map(row_to_item).transpose()
    }

    /// Overwrite every field of an existing item and bump `updated_at`
    ///
    /// # Errors
    ///
    /// Returns an error if the item fails validation, does not exist, or the update fails
    pub async fn update_item(&self, item: &Item) -> AppResult<Item> {
        item.validate()?;
        let mut updated = item.clone();
        updated.updated_at = Utc::now();

        let result = sqlx::query(
            r"
            UPDATE items SET
                updated_at = ?1, name = ?2, photo_uri = ?3, category = ?4, subcategory = ?5,
                colors = ?6, fabric = ?7, warmth = ?8, waterproof = ?9, windproof = ?10,
                tags = ?11, seasons = ?12, formal_level = ?13, cost = ?14, last_worn = ?15,
                archived = ?16
            WHERE id = ?17
            ",
        )
        .bind(to_millis(updated.updated_at))
        .bind(&updated.name)
        .bind(&updated.photo_uri)
        .bind(updated.category.as_str())
        .bind(&updated.subcategory)
        .bind(serde_json::to_string(&updated.colors)?)
        .bind(&updated.fabric)
        .bind(updated.warmth.map(|w| i64::from(w.value())))
        .bind(updated.waterproof)
        .bind(updated.windproof)
        .bind(encode_tags(&updated.tags)?)
        .bind(serde_json::to_string(&updated.seasons)?)
        .bind(updated.formal_level.map(i64::from))
        .bind(updated.cost)
        .bind(updated.last_worn.map(to_millis))
        .bind(updated.archived)
        .bind(&updated.id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update item: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Item {}", item.id)));
        }
        Ok(updated)
    }

    /// Soft-delete an item; it stays in storage but is never recommended
    ///
    /// # Errors
    ///
    /// Returns an error if the item does not exist or the update fails
    pub async fn archive_item(&self, id: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE items SET archived = 1, updated_at = ?1 WHERE id = ?2")
            .bind(to_millis(Utc::now()))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to archive item: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Item {id}")));
        }
        debug!(item_id = %id, "Item archived");
        Ok(())
    }

    /// Permanently remove an item
    ///
    /// # Errors
    ///
    /// Returns an error if the item does not exist or the delete fails
    pub async fn delete_item(&self, id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete item: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Item {id}")));
        }
        debug!(item_id = %id, "Item deleted");
        Ok(())
    }

    /// Record that one item was worn at `when`
    ///
    /// # Errors
    ///
    /// Returns an error if the item does not exist or the update fails
    pub async fn mark_item_worn(&self, id: &str, when: DateTime<Utc>) -> AppResult<()> {
        let result = sqlx::query("UPDATE items SET last_worn = ?1 WHERE id = ?2")
            .bind(to_millis(when))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to mark item worn: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Item {id}")));
        }
        Ok(())
    }

    /// Record that several items were worn at `when`, all or nothing
    ///
    /// # Errors
    ///
    /// Returns an error if any update fails; no item is changed in that case
    pub async fn mark_items_worn(&self, ids: &[String], when: DateTime<Utc>) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let worn_at = to_millis(when);
        for id in ids {
            sqlx::query("UPDATE items SET last_worn = ?1 WHERE id = ?2")
                .bind(worn_at)
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e| AppError::database(format!("Failed to mark item worn: {e}")))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit wear update: {e}")))?;
        debug!(count = ids.len(), "Items marked worn");
        Ok(())
    }

    /// Non-archived items, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn list_active_items(&self) -> AppResult<Vec<Item>> {
        let rows = sqlx::query(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE archived = 0 ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list items: {e}")))?;

        rows.iter().map(row_to_item).collect()
    }

    /// Every item including archived ones, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn list_all_items(&self) -> AppResult<Vec<Item>> {
        let rows = sqlx::query(&format!(
            "SELECT {ITEM_COLUMNS} FROM items ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list items: {e}")))?;

        rows.iter().map(row_to_item).collect()
    }

    /// Non-archived items of one category, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn list_items_by_category(&self, category: Category) -> AppResult<Vec<Item>> {
        let rows = sqlx::query(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE archived = 0 AND category = ?1 ORDER BY created_at DESC"
        ))
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list items by category: {e}")))?;

        rows.iter().map(row_to_item).collect()
    }

    /// Non-archived items whose name, category, or subcategory contains `query`
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn search_items(&self, query: &str) -> AppResult<Vec<Item>> {
        let pattern = format!("%{query}%");
        let rows = sqlx::query(&format!(
            r"
            SELECT {ITEM_COLUMNS} FROM items
            WHERE archived = 0
              AND (name LIKE ?1 OR category LIKE ?1 OR subcategory LIKE ?1)
            ORDER BY created_at DESC
            "
        ))
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to search items: {e}")))?;

        rows.iter().map(row_to_item).collect()
    }
}

fn encode_tags(tags: &BTreeSet<String>) -> AppResult<Option<String>> {
    if tags.is_empty() {
        Ok(None)
    } else {
        Ok(Some(serde_json::to_string(tags)?))
    }
}

fn row_to_item(row: &SqliteRow) -> AppResult<Item> {
    let category: String = row.try_get("category")?;
    let colors: String = row.try_get("colors")?;
    let seasons: String = row.try_get("seasons")?;
    let tags: Option<String> = row.try_get("tags")?;
    let warmth: Option<i64> = row.try_get("warmth")?;
    let formal_level: Option<i64> = row.try_get("formal_level")?;
    let last_worn: Option<i64> = row.try_get("last_worn")?;

    Ok(Item {
        id: row.try_get("id")?,
        created_at: from_millis(row.try_get("created_at")?)?,
        updated_at: from_millis(row.try_get("updated_at")?)?,
        name: row.try_get("name")?,
        photo_uri: row.try_get("photo_uri")?,
        category: category.parse()?,
        subcategory: row.try_get("subcategory")?,
        colors: serde_json::from_str(&colors)?,
        fabric: row.try_get("fabric")?,
        warmth: warmth.map(Warmth::new).transpose()?,
        waterproof: row.try_get("waterproof")?,
        windproof: row.try_get("windproof")?,
        tags: tags
            .as_deref()
            .map(serde_json::from_str)
            .transpose()?
            .unwrap_or_default(),
        seasons: serde_json::from_str(&seasons)?,
        formal_level: formal_level.and_then(|level| u8::try_from(level).ok()),
        cost: row.try_get("cost")?,
        last_worn: last_worn.map(from_millis).transpose()?,
        archived: row.try_get("archived")?,
    })
}
