// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory databases, and wardrobe fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `wardrobe_engine`

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Once;
use wardrobe_core::models::{Category, Item, Warmth, WeatherSnapshot};
use wardrobe_engine::database::Database;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory database with all tables created
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    let database = Database::new("sqlite::memory:").await?;
    Ok(database)
}

/// Fixed clock so recency and cache expiry are deterministic
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 8, 0, 0).unwrap()
}

pub fn warmth(level: i64) -> Warmth {
    Warmth::new(level).unwrap()
}

/// Top, bottom, dress, two outerwear, two shoes and an accessory
pub fn basic_wardrobe() -> Vec<Item> {
    vec![
        Item::new("Oxford Shirt", Category::Top).with_id("top-1"),
        Item::new("Linen Shirt", Category::Top).with_id("top-2"),
        Item::new("Chinos", Category::Bottom).with_id("bottom-1"),
        Item::new("Rain Shell", Category::Outerwear)
            .with_id("outer-rain")
            .waterproof()
            .with_warmth(warmth(1)),
        Item::new("Down Parka", Category::Outerwear)
            .with_id("outer-warm")
            .with_warmth(warmth(5)),
        Item::new("Canvas Sneakers", Category::Shoes).with_id("shoes-1"),
        Item::new("Rubber Boots", Category::Shoes)
            .with_id("shoes-rain")
            .waterproof(),
        Item::new("Wool Scarf", Category::Accessory).with_id("acc-1"),
    ]
}

/// Weather taken at `taken_at`
pub fn weather_at(
    temp_c: f64,
    precip_mm: f64,
    wind_kph: f64,
    taken_at: DateTime<Utc>,
) -> WeatherSnapshot {
    let mut snapshot = WeatherSnapshot::new(temp_c, precip_mm, wind_kph, "Test");
    snapshot.taken_at = taken_at;
    snapshot
}

/// Insert every item
pub async fn insert_items(database: &Database, items: &[Item]) -> Result<()> {
    for item in items {
        database.create_item(item).await?;
    }
    Ok(())
}
