// ABOUTME: Integration tests for SQLite persistence of items, preferences, weather, outfits and settings
// ABOUTME: Uses in-memory databases so every test starts from an empty schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use anyhow::Result;
use chrono::Duration;
use common::{create_test_database, fixed_now, insert_items, warmth, weather_at};
use wardrobe_core::models::{
    AppSettings, Category, DressCode, Item, LocationMode, Outfit, OutfitItem, OutfitSlot,
    Preferences, StylePreference,
};
use wardrobe_engine::database::WardrobeRepository;
use wardrobe_engine::errors::ErrorCode;

fn dated(item: Item, minutes_ago: i64) -> Item {
    let mut item = item;
    let created = fixed_now() - Duration::minutes(minutes_ago);
    item.created_at = created;
    item.updated_at = created;
    item
}

#[tokio::test]
async fn test_item_round_trip_preserves_fields() -> Result<()> {
    let database = create_test_database().await?;

    let mut item = dated(
        Item::new("Waxed Jacket", Category::Outerwear)
            .with_id("jacket-1")
            .with_warmth(warmth(3))
            .waterproof()
            .with_tag("heritage")
            .with_tag("country"),
        0,
    );
    item.subcategory = Some("field jacket".into());
    item.colors = vec!["olive".into(), "brown".into()];
    item.seasons = vec!["autumn".into()];
    item.fabric = Some("waxed cotton".into());
    item.formal_level = Some(2);
    item.cost = Some(249.5);
    item.last_worn = Some(fixed_now() - Duration::days(3));

    database.create_item(&item).await?;
    let loaded = database.get_item("jacket-1").await?.expect("item stored");

    assert_eq!(loaded, item);
    Ok(())
}

#[tokio::test]
async fn test_item_without_tags_round_trips_empty() -> Result<()> {
    let database = create_test_database().await?;
    let item = dated(Item::new("Plain Tee", Category::Top).with_id("tee"), 0);

    database.create_item(&item).await?;
    let loaded = database.get_item("tee").await?.unwrap();

    assert!(loaded.tags.is_empty());
    assert!(loaded.warmth.is_none());
    Ok(())
}

#[tokio::test]
async fn test_create_item_rejects_blank_name() -> Result<()> {
    let database = create_test_database().await?;
    let item = Item::new("   ", Category::Top);

    let err = database.create_item(&item).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    Ok(())
}

#[tokio::test]
async fn test_list_active_items_newest_first_without_archived() -> Result<()> {
    let database = create_test_database().await?;
    insert_items(
        &database,
        &[
            dated(Item::new("Old", Category::Top).with_id("old"), 30),
            dated(Item::new("New", Category::Top).with_id("new"), 1),
            dated(Item::new("Mid", Category::Bottom).with_id("mid"), 10),
            dated(Item::new("Gone", Category::Shoes).with_id("gone").archived(), 0),
        ],
    )
    .await?;

    let ids: Vec<String> = database
        .list_active_items()
        .await?
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);

    assert_eq!(database.list_all_items().await?.len(), 4);
    Ok(())
}

#[tokio::test]
async fn test_archive_hides_item_but_keeps_it() -> Result<()> {
    let database = create_test_database().await?;
    insert_items(&database, &[Item::new("Blazer", Category::Top).with_id("blazer")]).await?;

    database.archive_item("blazer").await?;

    assert!(database.list_active_items().await?.is_empty());
    let stored = database.get_item("blazer").await?.unwrap();
    assert!(stored.archived);
    Ok(())
}

#[tokio::test]
async fn test_delete_and_archive_unknown_item_are_not_found() -> Result<()> {
    let database = create_test_database().await?;

    let err = database.delete_item("missing").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let err = database.archive_item("missing").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    Ok(())
}

#[tokio::test]
async fn test_update_item_changes_fields() -> Result<()> {
    let database = create_test_database().await?;
    let item = dated(Item::new("Cardigan", Category::Top).with_id("cardi"), 0);
    database.create_item(&item).await?;

    let mut edited = item.clone();
    edited.name = "Chunky Cardigan".into();
    edited.warmth = Some(warmth(3));
    database.update_item(&edited).await?;

    let stored = database.get_item("cardi").await?.unwrap();
    assert_eq!(stored.name, "Chunky Cardigan");
    assert_eq!(stored.warmth, Some(warmth(3)));
    assert!(stored.updated_at >= item.updated_at);

    let ghost = Item::new("Ghost", Category::Top).with_id("ghost");
    let err = database.update_item(&ghost).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    Ok(())
}

#[tokio::test]
async fn test_mark_items_worn_updates_only_listed_items() -> Result<()> {
    let database = create_test_database().await?;
    insert_items(
        &database,
        &[
            Item::new("A", Category::Top).with_id("a"),
            Item::new("B", Category::Bottom).with_id("b"),
            Item::new("C", Category::Shoes).with_id("c"),
        ],
    )
    .await?;

    let when = fixed_now();
    database
        .mark_items_worn(&["a".to_owned(), "c".to_owned()], when)
        .await?;

    assert_eq!(database.get_item("a").await?.unwrap().last_worn, Some(when));
    assert_eq!(database.get_item("b").await?.unwrap().last_worn, None);
    assert_eq!(database.get_item("c").await?.unwrap().last_worn, Some(when));
    Ok(())
}

#[tokio::test]
async fn test_list_by_category_and_search() -> Result<()> {
    let database = create_test_database().await?;
    let mut chinos = Item::new("Stone Trousers", Category::Bottom).with_id("chinos");
    chinos.subcategory = Some("chinos".into());
    insert_items(
        &database,
        &[
            chinos,
            Item::new("Denim Jacket", Category::Outerwear).with_id("denim-jacket"),
            Item::new("Denim Jeans", Category::Bottom).with_id("jeans"),
            Item::new("Denim Shorts", Category::Bottom)
                .with_id("shorts")
                .archived(),
        ],
    )
    .await?;

    let bottoms = database.list_items_by_category(Category::Bottom).await?;
    assert_eq!(bottoms.len(), 2);
    assert!(bottoms.iter().all(|item| item.category == Category::Bottom));

    let denim: Vec<String> = database
        .search_items("denim")
        .await?
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(denim.len(), 2);
    assert!(!denim.contains(&"shorts".to_owned()));

    let by_subcategory = database.search_items("chino").await?;
    assert_eq!(by_subcategory.len(), 1);
    assert_eq!(by_subcategory[0].id, "chinos");

    let by_category = database.search_items("outer").await?;
    assert_eq!(by_category.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_preferences_default_then_saved() -> Result<()> {
    let database = create_test_database().await?;

    let defaults = database.get_preferences().await?;
    assert_eq!(defaults, Preferences::default());

    let mut custom = Preferences::default().with_avoid_tags(["wool", "itchy"]);
    custom.style_preference = StylePreference::Minimalist;
    custom.dress_codes = vec![DressCode::Office];
    custom.formality_level = 4;
    database.save_preferences(&custom).await?;

    assert_eq!(database.get_preferences().await?, custom);
    Ok(())
}

#[tokio::test]
async fn test_weather_cache_expiry() -> Result<()> {
    let database = create_test_database().await?;
    let taken = fixed_now();
    let mut snapshot = weather_at(12.0, 0.5, 18.0, taken);
    snapshot.city = Some("Leeds".into());
    database.save_weather(&snapshot).await?;

    let max_age = Duration::minutes(60);
    let fresh = database
        .get_fresh_weather(taken + Duration::minutes(59), max_age)
        .await?;
    assert_eq!(fresh, Some(snapshot.clone()));

    let expired = database
        .get_fresh_weather(taken + Duration::minutes(61), max_age)
        .await?;
    assert!(expired.is_none());

    assert_eq!(database.get_stored_weather().await?, Some(snapshot));
    Ok(())
}

#[tokio::test]
async fn test_weather_rejects_negative_wind() -> Result<()> {
    let database = create_test_database().await?;
    let snapshot = weather_at(12.0, 0.0, -4.0, fixed_now());

    let err = database.save_weather(&snapshot).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert!(database.get_stored_weather().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_outfits_round_trip_and_order() -> Result<()> {
    let database = create_test_database().await?;
    let weather = weather_at(8.0, 0.0, 5.0, fixed_now());

    let older = Outfit {
        id: "outfit-old".into(),
        created_at: fixed_now() - Duration::days(1),
        explanation: "Yesterday".into(),
        items: vec![OutfitItem {
            slot: OutfitSlot::Top,
            item_id: "top-1".into(),
        }],
        weather: weather.clone(),
    };
    let newer = Outfit {
        id: "outfit-new".into(),
        created_at: fixed_now(),
        explanation: "Today".into(),
        items: vec![
            OutfitItem {
                slot: OutfitSlot::Dress,
                item_id: "dress-1".into(),
            },
            OutfitItem {
                slot: OutfitSlot::Shoes,
                item_id: "shoes-1".into(),
            },
        ],
        weather,
    };
    database.save_outfit(&older).await?;
    database.save_outfit(&newer).await?;

    assert_eq!(database.get_outfit("outfit-old").await?, Some(older));
    assert_eq!(database.get_latest_outfit().await?, Some(newer.clone()));

    let listed = database.list_outfits(10).await?;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, "outfit-new");
    assert_eq!(database.list_outfits(1).await?.len(), 1);

    database.delete_outfit("outfit-old").await?;
    assert!(database.get_outfit("outfit-old").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_save_outfit_upserts_by_id() -> Result<()> {
    let database = create_test_database().await?;
    let mut outfit = Outfit {
        id: "outfit-1".into(),
        created_at: fixed_now(),
        explanation: "First".into(),
        items: vec![OutfitItem {
            slot: OutfitSlot::Top,
            item_id: "top-1".into(),
        }],
        weather: weather_at(20.0, 0.0, 0.0, fixed_now()),
    };
    database.save_outfit(&outfit).await?;

    outfit.items[0].item_id = "top-2".into();
    database.save_outfit(&outfit).await?;

    let stored = database.get_outfit("outfit-1").await?.unwrap();
    assert_eq!(stored.item_for_slot(OutfitSlot::Top), Some("top-2"));
    assert_eq!(database.list_outfits(10).await?.len(), 1);
    Ok(())
}

async fn outfit_via_repository<R: WardrobeRepository>(
    repository: &R,
    outfit: &Outfit,
) -> Result<Option<Outfit>> {
    repository.save_outfit(outfit).await?;
    Ok(repository.get_outfit(&outfit.id).await?)
}

#[tokio::test]
async fn test_repository_trait_reads_back_outfits_and_marks_wear() -> Result<()> {
    let database = create_test_database().await?;
    insert_items(
        &database,
        &[dated(
            Item::new("Linen Shirt", Category::Top).with_id("top-1"),
            10,
        )],
    )
    .await?;
    let outfit = Outfit {
        id: "outfit-trait".into(),
        created_at: fixed_now(),
        explanation: "Through the trait".into(),
        items: vec![OutfitItem {
            slot: OutfitSlot::Top,
            item_id: "top-1".into(),
        }],
        weather: weather_at(18.0, 0.0, 3.0, fixed_now()),
    };

    let stored = outfit_via_repository(&database, &outfit).await?;
    assert_eq!(stored, Some(outfit));
    assert!(WardrobeRepository::get_outfit(&database, "missing")
        .await?
        .is_none());

    WardrobeRepository::mark_items_worn(&database, &["top-1".to_owned()], fixed_now()).await?;
    let item = WardrobeRepository::get_item(&database, "top-1").await?.unwrap();
    assert_eq!(item.last_worn, Some(fixed_now()));
    Ok(())
}

#[tokio::test]
async fn test_settings_default_then_saved() -> Result<()> {
    let database = create_test_database().await?;
    assert_eq!(database.get_settings().await?, AppSettings::default());

    let settings = AppSettings {
        location_mode: LocationMode::Manual,
        manual_city: Some("Oslo".into()),
        manual_lat: Some(59.91),
        manual_lon: Some(10.75),
        onboarding_completed: true,
    };
    database.save_settings(&settings).await?;

    let stored = database.get_settings().await?;
    assert_eq!(stored, settings);
    assert_eq!(stored.manual_coordinates(), Some((59.91, 10.75)));
    Ok(())
}

#[tokio::test]
async fn test_seed_only_fills_empty_wardrobe() -> Result<()> {
    let database = create_test_database().await?;

    let inserted = database.seed_demo_wardrobe().await?;
    assert!(inserted > 0);
    assert_eq!(database.list_active_items().await?.len(), inserted);

    assert_eq!(database.seed_demo_wardrobe().await?, 0);
    assert_eq!(database.list_all_items().await?.len(), inserted);
    Ok(())
}

#[tokio::test]
async fn test_file_database_creates_parent_directory() -> Result<()> {
    common::init_test_logging();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("wardrobe.db");
    let url = format!("sqlite:{}", path.display());

    let database = wardrobe_engine::database::Database::new(&url).await?;
    insert_items(&database, &[Item::new("Tee", Category::Top)]).await?;

    assert!(path.exists());
    Ok(())
}
