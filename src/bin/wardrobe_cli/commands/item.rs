// ABOUTME: Item management commands for wardrobe-cli
// ABOUTME: Handles add, list, show, archive, delete, worn and search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use tracing::info;
use wardrobe_core::models::{Category, Item, Warmth};
use wardrobe_engine::{
    database::Database,
    errors::{AppError, AppResult},
};

type Result<T> = AppResult<T>;

use crate::helpers::display::{display_item_details, display_item_table};

/// Fields collected by `item add`
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub warmth: Option<i64>,
    pub waterproof: bool,
    pub windproof: bool,
    pub colors: Vec<String>,
    pub tags: Vec<String>,
    pub seasons: Vec<String>,
    pub fabric: Option<String>,
    pub formal_level: Option<u8>,
    pub cost: Option<f64>,
    pub photo_uri: Option<String>,
}

impl NewItem {
    fn into_item(self) -> Result<Item> {
        let category: Category = self.category.parse()?;
        let mut item = Item::new(self.name, category);
        item.subcategory = self.subcategory;
        item.warmth = self.warmth.map(Warmth::new).transpose()?;
        item.waterproof = self.waterproof;
        item.windproof = self.windproof;
        item.colors = self.colors;
        item.tags = self.tags.into_iter().collect();
        item.seasons = self.seasons;
        item.fabric = self.fabric;
        item.formal_level = self.formal_level;
        item.cost = self.cost;
        item.photo_uri = self.photo_uri;
        Ok(item)
    }
}

/// Add a new item
pub async fn add(database: &Database, draft: NewItem) -> Result<()> {
    let item = draft.into_item()?;
    database.create_item(&item).await?;
    info!(item_id = %item.id, category = %item.category, "Item added");

    println!("Added {} ({})", item.name, item.id);
    Ok(())
}

/// List items, optionally filtered by category
///
/// Category listings only cover active items.
pub async fn list(
    database: &Database,
    category: Option<&str>,
    include_archived: bool,
) -> Result<()> {
    let items = match category {
        Some(label) => {
            let category: Category = label.parse()?;
            database.list_items_by_category(category).await?
        }
        None if include_archived => database.list_all_items().await?,
        None => database.list_active_items().await?,
    };

    if items.is_empty() {
        println!("No items found. Add one with `wardrobe-cli item add`.");
        return Ok(());
    }
    display_item_table(&items);
    Ok(())
}

/// Show every field of one item
pub async fn show(database: &Database, item_id: &str) -> Result<()> {
    let item = load_item(database, item_id).await?;
    display_item_details(&item);
    Ok(())
}

/// Archive an item
pub async fn archive(database: &Database, item_id: &str) -> Result<()> {
    database.archive_item(item_id).await?;
    println!("Archived {item_id}");
    Ok(())
}

/// Permanently delete an item
pub async fn delete(database: &Database, item_id: &str) -> Result<()> {
    database.delete_item(item_id).await?;
    println!("Deleted {item_id}");
    Ok(())
}

/// Mark an item as worn now
pub async fn worn(database: &Database, item_id: &str) -> Result<()> {
    database.mark_item_worn(item_id, Utc::now()).await?;
    println!("Marked {item_id} as worn");
    Ok(())
}

/// Search items by name, category or subcategory
pub async fn search(database: &Database, query: &str) -> Result<()> {
    let items = database.search_items(query).await?;
    if items.is_empty() {
        println!("No items match '{query}'");
        return Ok(());
    }
    display_item_table(&items);
    Ok(())
}

async fn load_item(database: &Database, item_id: &str) -> Result<Item> {
    database
        .get_item(item_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Item {item_id}")))
}
