// ABOUTME: Demo wardrobe seeding for first runs and manual testing
// ABOUTME: Inserts a small mixed wardrobe only when no items exist yet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Demo Wardrobe Seeding
//!
//! ```bash
//! wardrobe-cli seed
//! ```

use super::Database;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use tracing::info;
use wardrobe_core::models::{Category, Item, Warmth};

fn warmth(level: i64) -> AppResult<Warmth> {
    Warmth::new(level).map_err(AppError::from)
}

/// A small wardrobe covering every slot, with staggered creation times
///
/// # Errors
///
/// Returns an error only if a warmth literal is out of range
pub fn demo_wardrobe(now: DateTime<Utc>) -> AppResult<Vec<Item>> {
    let mut items = vec![
        Item::new("White Oxford Shirt", Category::Top).with_tag("smart"),
        Item::new("Grey Merino Sweater", Category::Top).with_warmth(warmth(2)?),
        Item::new("Striped Tee", Category::Top).with_warmth(warmth(0)?),
        Item::new("Dark Jeans", Category::Bottom).with_warmth(warmth(1)?),
        Item::new("Tailored Trousers", Category::Bottom).with_tag("formal"),
        Item::new("Linen Midi Dress", Category::Dress).with_warmth(warmth(0)?),
        Item::new("Trench Coat", Category::Outerwear)
            .waterproof()
            .with_warmth(warmth(1)?),
        Item::new("Wool Overcoat", Category::Outerwear).with_warmth(warmth(4)?),
        Item::new("Softshell Jacket", Category::Outerwear)
            .windproof()
            .with_warmth(warmth(2)?),
        Item::new("White Sneakers", Category::Shoes),
        Item::new("Leather Chelsea Boots", Category::Shoes).waterproof(),
        Item::new("Cashmere Scarf", Category::Accessory).with_warmth(warmth(2)?),
        Item::new("Running Tights", Category::Athleisure),
    ];

    for (offset, item) in (0_i64..).zip(items.iter_mut()) {
        let created = now - Duration::minutes(offset);
        item.created_at = created;
        item.updated_at = created;
    }
    Ok(items)
}

impl Database {
    /// Insert the demo wardrobe when the items table is empty
    ///
    /// Returns the number of items inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if counting or inserting fails
    pub async fn seed_demo_wardrobe(&self) -> AppResult<usize> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count items: {e}")))?;

        if existing > 0 {
            info!(existing, "Wardrobe already has items, skipping seed");
            return Ok(0);
        }

        let items = demo_wardrobe(Utc::now())?;
        for item in &items {
            self.create_item(item).await?;
        }
        info!(count = items.len(), "Seeded demo wardrobe");
        Ok(items.len())
    }
}
