// ABOUTME: Integration tests for the outfit recommender's slot filling behavior
// ABOUTME: Covers weather gates, slot exclusivity, recency and avoid-tag ranking, and failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::too_many_lines)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashSet;
use wardrobe_core::errors::RecommendationError;
use wardrobe_core::models::{Category, Item, OutfitSlot, Preferences, Warmth, WeatherSnapshot};
use wardrobe_intelligence::{
    recommend, score_item, OutfitRecommender, RecommendationEngineConfig,
};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 8, 0, 0).unwrap()
}

fn warmth(level: i64) -> Warmth {
    Warmth::new(level).unwrap()
}

fn mixed_wardrobe() -> Vec<Item> {
    let now = fixed_now();
    vec![
        Item::new("Trench Coat", Category::Outerwear)
            .with_id("coat-rain")
            .waterproof()
            .with_warmth(warmth(1)),
        Item::new("Wool Coat", Category::Outerwear)
            .with_id("coat-wool")
            .with_warmth(warmth(4)),
        Item::new("Shell Jacket", Category::Outerwear)
            .with_id("coat-wind")
            .windproof()
            .with_warmth(warmth(2)),
        Item::new("Oxford Shirt", Category::Top).with_id("top-1"),
        Item::new("Striped Tee", Category::Top)
            .with_id("top-2")
            .worn_at(now - Duration::days(2)),
        Item::new("Chinos", Category::Bottom).with_id("bottom-1"),
        Item::new("Sneakers", Category::Shoes).with_id("shoes-1"),
        Item::new("Rain Boots", Category::Shoes)
            .with_id("shoes-rain")
            .waterproof()
            .worn_at(now - Duration::days(1)),
        Item::new("Scarf", Category::Accessory).with_id("acc-1"),
        Item::new("Gym Shorts", Category::Athleisure).with_id("ath-1"),
        Item::new("Old Parka", Category::Outerwear)
            .with_id("coat-archived")
            .waterproof()
            .windproof()
            .with_warmth(warmth(5))
            .archived(),
    ]
}

fn slots(outfit: &wardrobe_core::models::Outfit) -> Vec<OutfitSlot> {
    outfit.items.iter().map(|entry| entry.slot).collect()
}

#[test]
fn test_same_inputs_give_same_assignments() {
    let wardrobe = mixed_wardrobe();
    let prefs = Preferences::default();
    let weather = WeatherSnapshot::new(6.0, 3.0, 30.0, "Rain");
    let recommender = OutfitRecommender::new();

    let first = recommender
        .recommend_at(&wardrobe, &prefs, &weather, fixed_now())
        .unwrap();
    let second = recommender
        .recommend_at(&wardrobe, &prefs, &weather, fixed_now())
        .unwrap();

    assert_eq!(first.items, second.items);
    assert_eq!(first.explanation, second.explanation);
    assert_ne!(first.id, second.id);
}

#[test]
fn test_no_duplicates_and_no_archived_items() {
    let wardrobe = mixed_wardrobe();
    let prefs = Preferences::default();

    for (temp, precip, wind) in [(-5.0, 0.0, 0.0), (10.0, 5.0, 40.0), (25.0, 0.0, 0.0)] {
        let weather = WeatherSnapshot::new(temp, precip, wind, "Mixed");
        let outfit = recommend(&wardrobe, &prefs, &weather).unwrap();

        let ids: Vec<_> = outfit.item_ids();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
        assert!(!outfit.contains_item("coat-archived"));
        assert!(!outfit.contains_item("ath-1"));
    }
}

#[test]
fn test_dress_excludes_top_and_bottom() {
    let mut wardrobe = mixed_wardrobe();
    wardrobe.push(Item::new("Wrap Dress", Category::Dress).with_id("dress-1"));
    let weather = WeatherSnapshot::new(22.0, 0.0, 0.0, "Clear");

    let outfit = recommend(&wardrobe, &Preferences::default(), &weather).unwrap();

    assert_eq!(outfit.item_for_slot(OutfitSlot::Dress), Some("dress-1"));
    assert!(!outfit.has_slot(OutfitSlot::Top));
    assert!(!outfit.has_slot(OutfitSlot::Bottom));
    assert!(outfit.explanation.contains("\n- Wrap Dress\n"));
}

#[test]
fn test_at_most_one_item_per_slot() {
    let wardrobe = mixed_wardrobe();
    let weather = WeatherSnapshot::new(2.0, 4.0, 30.0, "Sleet");
    let outfit = recommend(&wardrobe, &Preferences::default(), &weather).unwrap();

    let all = slots(&outfit);
    let unique: HashSet<_> = all.iter().collect();
    assert_eq!(all.len(), unique.len());
}

#[test]
fn test_mild_calm_dry_weather_skips_outerwear() {
    let wardrobe = mixed_wardrobe();
    let weather = WeatherSnapshot::new(16.0, 0.0, 24.9, "Clear");
    let outfit = recommend(&wardrobe, &Preferences::default(), &weather).unwrap();

    assert!(!outfit.has_slot(OutfitSlot::Outerwear));
    assert_eq!(
        slots(&outfit),
        vec![
            OutfitSlot::Top,
            OutfitSlot::Bottom,
            OutfitSlot::Shoes,
            OutfitSlot::Accessory
        ]
    );
}

#[test]
fn test_rain_adds_outerwear_even_when_warm() {
    let wardrobe = mixed_wardrobe();
    let weather = WeatherSnapshot::new(24.0, 2.0, 0.0, "Showers");
    let outfit = recommend(&wardrobe, &Preferences::default(), &weather).unwrap();

    assert_eq!(outfit.item_for_slot(OutfitSlot::Outerwear), Some("coat-rain"));
    assert!(outfit
        .explanation
        .contains("- Trench Coat for rain protection"));
}

#[test]
fn test_wind_alone_in_warm_weather_skips_outerwear() {
    let wardrobe = mixed_wardrobe();
    let weather = WeatherSnapshot::new(20.0, 0.0, 40.0, "Clear");
    let outfit = recommend(&wardrobe, &Preferences::default(), &weather).unwrap();

    assert!(!outfit.has_slot(OutfitSlot::Outerwear));
    assert!(outfit
        .explanation
        .starts_with("Based on 20°C weather and wind:"));
}

#[test]
fn test_wind_in_cool_weather_picks_windproof() {
    let wardrobe = mixed_wardrobe();
    let weather = WeatherSnapshot::new(12.0, 0.0, 30.0, "Partly Cloudy");
    let outfit = recommend(&wardrobe, &Preferences::default(), &weather).unwrap();

    assert_eq!(outfit.item_for_slot(OutfitSlot::Outerwear), Some("coat-wind"));
    assert!(outfit
        .explanation
        .contains("- Shell Jacket for wind protection"));
}

#[test]
fn test_cold_weather_picks_warm_enough_outerwear() {
    let wardrobe = mixed_wardrobe();
    let weather = WeatherSnapshot::new(3.0, 0.0, 5.0, "Clear");
    let outfit = recommend(&wardrobe, &Preferences::default(), &weather).unwrap();

    assert_eq!(outfit.item_for_slot(OutfitSlot::Outerwear), Some("coat-wool"));
    assert!(outfit.explanation.contains("- Wool Coat for warmth"));
}

#[test]
fn test_cold_weather_without_warm_enough_outerwear_skips_slot() {
    let wardrobe = vec![
        Item::new("Denim Jacket", Category::Outerwear)
            .with_id("coat-thin")
            .with_warmth(warmth(2)),
        Item::new("Tee", Category::Top).with_id("top-1"),
    ];
    let weather = WeatherSnapshot::new(0.0, 0.0, 0.0, "Clear");
    let outfit = recommend(&wardrobe, &Preferences::default(), &weather).unwrap();

    assert!(!outfit.has_slot(OutfitSlot::Outerwear));
    assert_eq!(outfit.item_ids(), vec!["top-1"]);
}

#[test]
fn test_rain_prefers_waterproof_over_warmer() {
    let wardrobe = vec![
        Item::new("Rain Jacket", Category::Outerwear)
            .with_id("waterproof")
            .waterproof()
            .with_warmth(warmth(1)),
        Item::new("Puffer", Category::Outerwear)
            .with_id("puffer")
            .with_warmth(warmth(3)),
    ];
    let weather = WeatherSnapshot::new(10.0, 5.0, 0.0, "Rain");
    let outfit = recommend(&wardrobe, &Preferences::default(), &weather).unwrap();

    assert_eq!(outfit.item_for_slot(OutfitSlot::Outerwear), Some("waterproof"));
    assert_eq!(outfit.items.len(), 1);
}

#[test]
fn test_rain_without_waterproof_outerwear_falls_back_to_warmth() {
    let wardrobe = vec![Item::new("Puffer", Category::Outerwear)
        .with_id("puffer")
        .with_warmth(warmth(3))];
    let weather = WeatherSnapshot::new(10.0, 5.0, 0.0, "Rain");
    let outfit = recommend(&wardrobe, &Preferences::default(), &weather).unwrap();

    assert_eq!(outfit.item_for_slot(OutfitSlot::Outerwear), Some("puffer"));
    assert!(outfit.explanation.contains("- Puffer for warmth"));
}

#[test]
fn test_rain_only_allows_waterproof_shoes() {
    let weather = WeatherSnapshot::new(18.0, 2.0, 0.0, "Drizzle");
    let prefs = Preferences::default();

    let both = vec![
        Item::new("Canvas", Category::Shoes).with_id("canvas"),
        Item::new("Boots", Category::Shoes).with_id("boots").waterproof(),
    ];
    let outfit = recommend(&both, &prefs, &weather).unwrap();
    assert_eq!(outfit.item_for_slot(OutfitSlot::Shoes), Some("boots"));
    assert!(outfit.explanation.contains("- Boots (water-resistant)"));

    let no_waterproof = vec![
        Item::new("Canvas", Category::Shoes).with_id("canvas"),
        Item::new("Tee", Category::Top).with_id("top-1"),
    ];
    let outfit = recommend(&no_waterproof, &prefs, &weather).unwrap();
    assert!(!outfit.has_slot(OutfitSlot::Shoes));
}

#[test]
fn test_never_worn_beats_recently_worn() {
    let now = fixed_now();
    let wardrobe = vec![
        Item::new("Worn Tee", Category::Top)
            .with_id("worn")
            .worn_at(now - Duration::days(1)),
        Item::new("Fresh Tee", Category::Top).with_id("fresh"),
    ];
    let weather = WeatherSnapshot::new(20.0, 0.0, 0.0, "Clear");
    let outfit = OutfitRecommender::new()
        .recommend_at(&wardrobe, &Preferences::default(), &weather, now)
        .unwrap();

    assert_eq!(outfit.item_for_slot(OutfitSlot::Top), Some("fresh"));
}

#[test]
fn test_avoid_tag_loses_to_untagged() {
    let wardrobe = vec![
        Item::new("Suit Trousers", Category::Bottom)
            .with_id("formal")
            .with_tag("formal"),
        Item::new("Jeans", Category::Bottom).with_id("plain"),
    ];
    let prefs = Preferences::default().with_avoid_tags(["formal"]);
    let weather = WeatherSnapshot::new(20.0, 0.0, 0.0, "Clear");
    let now = fixed_now();

    assert_eq!(score_item(&wardrobe[0], &prefs, &weather, 0, now), 50.0);
    assert_eq!(score_item(&wardrobe[1], &prefs, &weather, 0, now), 100.0);

    let outfit = recommend(&wardrobe, &prefs, &weather).unwrap();
    assert_eq!(outfit.item_for_slot(OutfitSlot::Bottom), Some("plain"));
}

#[test]
fn test_empty_wardrobe_errors() {
    let weather = WeatherSnapshot::new(20.0, 0.0, 0.0, "Clear");
    assert_eq!(
        recommend(&[], &Preferences::default(), &weather),
        Err(RecommendationError::EmptyWardrobe)
    );

    let all_archived = vec![Item::new("Old Tee", Category::Top).archived()];
    assert_eq!(
        recommend(&all_archived, &Preferences::default(), &weather),
        Err(RecommendationError::EmptyWardrobe)
    );
}

#[test]
fn test_only_unusable_items_is_incomplete() {
    let wardrobe = vec![Item::new("Yoga Pants", Category::Athleisure)];
    let weather = WeatherSnapshot::new(20.0, 0.0, 0.0, "Clear");
    assert_eq!(
        recommend(&wardrobe, &Preferences::default(), &weather),
        Err(RecommendationError::IncompleteOutfit)
    );
}

#[test]
fn test_rescoring_is_stable() {
    let item = Item::new("Sweater", Category::Top)
        .with_warmth(warmth(2))
        .worn_at(fixed_now() - Duration::hours(30));
    let prefs = Preferences::default();
    let weather = WeatherSnapshot::new(9.0, 0.0, 0.0, "Clear");

    let first = score_item(&item, &prefs, &weather, 1, fixed_now());
    let second = score_item(&item, &prefs, &weather, 1, fixed_now());
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_explanation_header_and_line_order() {
    let wardrobe = mixed_wardrobe();
    let weather = WeatherSnapshot::new(10.0, 5.0, 30.0, "Rain");
    let outfit = OutfitRecommender::new()
        .recommend_at(&wardrobe, &Preferences::default(), &weather, fixed_now())
        .unwrap();

    let lines: Vec<_> = outfit.explanation.lines().collect();
    assert_eq!(lines[0], "Based on 10°C weather with rain and wind:");
    assert_eq!(lines[1], "- Trench Coat for rain protection");
    assert_eq!(lines.len(), outfit.items.len() + 1);
    assert_eq!(outfit.weather, weather);
    assert_eq!(outfit.created_at, fixed_now());
}

#[test]
fn test_custom_thresholds_change_gates() {
    let mut config = RecommendationEngineConfig::default();
    config.weather.mild_temp_celsius = 25.0;
    let recommender = OutfitRecommender::with_config(config);

    let wardrobe = mixed_wardrobe();
    let weather = WeatherSnapshot::new(20.0, 0.0, 0.0, "Clear");
    let outfit = recommender
        .recommend_at(&wardrobe, &Preferences::default(), &weather, fixed_now())
        .unwrap();

    assert!(outfit.has_slot(OutfitSlot::Outerwear));
}
