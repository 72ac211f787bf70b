// ABOUTME: Integration tests for the outfit service over an in-memory database
// ABOUTME: Covers persistence, wear tracking, weather gating, and laundry and manual swaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::Duration;
use common::{basic_wardrobe, create_test_database, fixed_now, insert_items, weather_at};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use wardrobe_core::models::{Category, Item, OutfitSlot};
use wardrobe_engine::database::Database;
use wardrobe_engine::errors::ErrorCode;
use wardrobe_engine::services::OutfitService;
use wardrobe_intelligence::OutfitRecommender;

async fn service_with(items: &[Item]) -> Result<OutfitService<Database>> {
    let database = create_test_database().await?;
    insert_items(&database, items).await?;
    Ok(OutfitService::new(
        database,
        OutfitRecommender::new(),
        Duration::minutes(60),
    ))
}

async fn store_weather(service: &OutfitService<Database>, temp: f64, precip: f64) -> Result<()> {
    service
        .repository()
        .save_weather(&weather_at(temp, precip, 5.0, fixed_now()))
        .await?;
    Ok(())
}

#[tokio::test]
async fn test_recommend_persists_outfit_and_marks_only_selected_items_worn() -> Result<()> {
    let service = service_with(&basic_wardrobe()).await?;
    store_weather(&service, 20.0, 0.0).await?;

    let now = fixed_now() + Duration::minutes(5);
    let outfit = service.recommend_today_at(now).await?;

    let stored = service.repository().get_outfit(&outfit.id).await?;
    assert_eq!(stored.as_ref(), Some(&outfit));
    assert_eq!(outfit.created_at, now);

    let selected: HashSet<&str> = outfit.item_ids().into_iter().collect();
    assert!(!selected.is_empty());
    for item in service.repository().list_all_items().await? {
        if selected.contains(item.id.as_str()) {
            assert_eq!(item.last_worn, Some(now), "{} should be worn", item.id);
        } else {
            assert_eq!(item.last_worn, None, "{} should be untouched", item.id);
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_recommend_uses_cached_weather() -> Result<()> {
    let service = service_with(&basic_wardrobe()).await?;
    store_weather(&service, 14.0, 2.0).await?;

    let outfit = service.recommend_today_at(fixed_now()).await?;

    assert_eq!(outfit.item_for_slot(OutfitSlot::Outerwear), Some("outer-rain"));
    assert_eq!(outfit.item_for_slot(OutfitSlot::Shoes), Some("shoes-rain"));
    assert!((outfit.weather.precip_mm - 2.0).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn test_recommend_without_weather_is_unavailable() -> Result<()> {
    let service = service_with(&basic_wardrobe()).await?;

    let err = service.recommend_today_at(fixed_now()).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::WeatherUnavailable);
    assert!(service.repository().get_latest_outfit().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_recommend_with_expired_weather_is_unavailable() -> Result<()> {
    let service = service_with(&basic_wardrobe()).await?;
    store_weather(&service, 20.0, 0.0).await?;

    let err = service
        .recommend_today_at(fixed_now() + Duration::minutes(90))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::WeatherUnavailable);
    Ok(())
}

#[tokio::test]
async fn test_recommend_with_empty_wardrobe() -> Result<()> {
    let service = service_with(&[]).await?;
    store_weather(&service, 20.0, 0.0).await?;

    let err = service.recommend_today_at(fixed_now()).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::EmptyWardrobe);
    assert!(err.to_string().contains("Add your first item"));
    Ok(())
}

#[tokio::test]
async fn test_laundry_swap_replaces_with_same_category_and_keeps_wear() -> Result<()> {
    let service = service_with(&basic_wardrobe()).await?;
    store_weather(&service, 20.0, 0.0).await?;
    let outfit = service.recommend_today_at(fixed_now()).await?;
    let top = outfit
        .item_for_slot(OutfitSlot::Top)
        .expect("warm weather outfit has a top")
        .to_owned();

    let mut rng = StdRng::seed_from_u64(7);
    let swapped = service.laundry_swap(&outfit.id, &top, &mut rng).await?;

    let new_top = swapped.item_for_slot(OutfitSlot::Top).unwrap();
    assert_ne!(new_top, top);
    assert!(new_top.starts_with("top-"));
    assert_eq!(swapped.id, outfit.id);
    assert_eq!(swapped.items.len(), outfit.items.len());

    let stored = service.repository().get_outfit(&outfit.id).await?.unwrap();
    assert_eq!(stored, swapped);

    let replacement = service.repository().get_item(new_top).await?.unwrap();
    assert_eq!(replacement.last_worn, None);
    Ok(())
}

#[tokio::test]
async fn test_laundry_swap_without_alternative() -> Result<()> {
    let service = service_with(&basic_wardrobe()).await?;
    store_weather(&service, 20.0, 0.0).await?;
    let outfit = service.recommend_today_at(fixed_now()).await?;

    let mut rng = StdRng::seed_from_u64(1);
    let err = service
        .laundry_swap(&outfit.id, "bottom-1", &mut rng)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.resource_id.as_deref(), Some("bottom-1"));
    Ok(())
}

#[tokio::test]
async fn test_laundry_swap_unknown_outfit() -> Result<()> {
    let service = service_with(&basic_wardrobe()).await?;

    let mut rng = StdRng::seed_from_u64(1);
    let err = service
        .laundry_swap("no-such-outfit", "top-1", &mut rng)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    Ok(())
}

#[tokio::test]
async fn test_manual_swap_checks_replacement() -> Result<()> {
    let mut wardrobe = basic_wardrobe();
    wardrobe.push(
        Item::new("Retired Polo", Category::Top)
            .with_id("top-archived")
            .archived(),
    );
    let service = service_with(&wardrobe).await?;
    store_weather(&service, 20.0, 0.0).await?;
    let outfit = service.recommend_today_at(fixed_now()).await?;
    let top = outfit.item_for_slot(OutfitSlot::Top).unwrap().to_owned();
    let other_top = if top == "top-1" { "top-2" } else { "top-1" };

    let err = service
        .swap_item(&outfit.id, &top, "bottom-1")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = service
        .swap_item(&outfit.id, &top, "top-archived")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = service
        .swap_item(&outfit.id, &top, "missing")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let swapped = service.swap_item(&outfit.id, &top, other_top).await?;
    assert_eq!(swapped.item_for_slot(OutfitSlot::Top), Some(other_top));
    assert_eq!(
        service.repository().get_latest_outfit().await?,
        Some(swapped)
    );
    Ok(())
}
