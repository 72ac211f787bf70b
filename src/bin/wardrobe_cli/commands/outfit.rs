// ABOUTME: Outfit commands for wardrobe-cli
// ABOUTME: Recommends today's outfit, browses history, and applies laundry or manual swaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use tracing::{info, warn};
use wardrobe_core::models::Outfit;
use wardrobe_engine::{
    config::AppConfig,
    database::Database,
    errors::{AppError, AppResult},
    services::OutfitService,
    weather::{OpenMeteoClient, WeatherService},
};
use wardrobe_intelligence::OutfitRecommender;

type Result<T> = AppResult<T>;

use crate::helpers::display::{display_outfit, display_outfit_summary};

fn outfit_service(database: Database, config: &AppConfig) -> OutfitService<Database> {
    let recommender =
        OutfitRecommender::with_config(config.intelligence.recommendation_engine.clone());
    OutfitService::new(database, recommender, config.weather_api.cache_expiry())
}

/// Recommend today's outfit, optionally refreshing stale weather first
pub async fn recommend(
    database: Database,
    config: &AppConfig,
    refresh_weather: bool,
) -> Result<()> {
    if refresh_weather {
        refresh_stale_weather(&database, config).await?;
    }

    let service = outfit_service(database, config);
    let outfit = service.recommend_today().await?;
    let wardrobe = service.repository().list_all_items().await?;

    display_outfit(&outfit, &wardrobe);
    Ok(())
}

async fn refresh_stale_weather(database: &Database, config: &AppConfig) -> Result<()> {
    let settings = database.get_settings().await?;
    let Some((lat, lon)) = settings.manual_coordinates() else {
        warn!("No saved location, using cached weather as is");
        return Ok(());
    };

    let service = WeatherService::new(
        OpenMeteoClient::new(&config.weather_api),
        config.weather_api.cache_expiry(),
    );
    service
        .current_or_fetch(database, lat, lon, Utc::now())
        .await?;
    Ok(())
}

/// Show the most recent outfit
pub async fn latest(database: &Database) -> Result<()> {
    let Some(outfit) = database.get_latest_outfit().await? else {
        println!("No outfits yet. Run `wardrobe-cli outfit recommend`.");
        return Ok(());
    };
    let wardrobe = database.list_all_items().await?;
    display_outfit(&outfit, &wardrobe);
    Ok(())
}

/// Show one outfit
pub async fn show(database: &Database, outfit_id: &str) -> Result<()> {
    let outfit = load_outfit(database, outfit_id).await?;
    let wardrobe = database.list_all_items().await?;
    display_outfit(&outfit, &wardrobe);
    Ok(())
}

/// List recent outfits, newest first
pub async fn list(database: &Database, limit: u32) -> Result<()> {
    let outfits = database.list_outfits(limit).await?;
    if outfits.is_empty() {
        println!("No outfits yet.");
        return Ok(());
    }
    let wardrobe = database.list_all_items().await?;
    for outfit in &outfits {
        display_outfit_summary(outfit, &wardrobe);
    }
    Ok(())
}

/// Replace an item that is in the laundry with a random alternative
pub async fn laundry(
    database: Database,
    config: &AppConfig,
    outfit_id: &str,
    item_id: &str,
) -> Result<()> {
    let service = outfit_service(database, config);
    let mut rng = rand::thread_rng();
    let outfit = service.laundry_swap(outfit_id, item_id, &mut rng).await?;
    info!(outfit_id, item_id, "Laundry swap complete");

    let wardrobe = service.repository().list_all_items().await?;
    display_outfit(&outfit, &wardrobe);
    Ok(())
}

/// Replace an item with a specific one
pub async fn swap(
    database: Database,
    config: &AppConfig,
    outfit_id: &str,
    item_id: &str,
    replacement_id: &str,
) -> Result<()> {
    let service = outfit_service(database, config);
    let outfit = service
        .swap_item(outfit_id, item_id, replacement_id)
        .await?;

    let wardrobe = service.repository().list_all_items().await?;
    display_outfit(&outfit, &wardrobe);
    Ok(())
}

async fn load_outfit(database: &Database, outfit_id: &str) -> Result<Outfit> {
    database
        .get_outfit(outfit_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Outfit {outfit_id}")))
}
