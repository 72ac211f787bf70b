// ABOUTME: Output formatting helpers for wardrobe-cli
// ABOUTME: Consistent display of items, preferences, weather and outfits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use wardrobe_core::models::{Item, Outfit, Preferences, WeatherSnapshot};

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn joined<'a>(values: impl IntoIterator<Item = &'a String>) -> String {
    let parts: Vec<&str> = values.into_iter().map(String::as_str).collect();
    if parts.is_empty() {
        "-".to_owned()
    } else {
        parts.join(", ")
    }
}

/// One line per item
pub fn display_item_table(items: &[Item]) {
    println!(
        "{:<36}  {:<10}  {:<28}  {:>6}  {:<10}",
        "ID", "CATEGORY", "NAME", "WARMTH", "LAST WORN"
    );
    println!("{}", "-".repeat(98));
    for item in items {
        let warmth = item
            .warmth
            .map_or_else(|| "-".to_owned(), |w| w.value().to_string());
        let last_worn = item
            .last_worn
            .map_or_else(|| "never".to_owned(), |t| t.format("%Y-%m-%d").to_string());
        let name = if item.archived {
            format!("{} (archived)", item.name)
        } else {
            item.name.clone()
        };
        println!(
            "{:<36}  {:<10}  {:<28}  {:>6}  {:<10}",
            item.id,
            item.category.as_str(),
            name,
            warmth,
            last_worn
        );
    }
    println!("\n{} item(s)", items.len());
}

/// Every field of one item
pub fn display_item_details(item: &Item) {
    println!("{}", item.name);
    println!("{}", "=".repeat(50));
    println!("   ID: {}", item.id);
    println!("   Category: {}", item.category);
    if let Some(subcategory) = &item.subcategory {
        println!("   Subcategory: {subcategory}");
    }
    match item.warmth {
        Some(warmth) => println!("   Warmth: {}", warmth.value()),
        None => println!("   Warmth: unrated"),
    }
    println!("   Waterproof: {}", yes_no(item.waterproof));
    println!("   Windproof: {}", yes_no(item.windproof));
    println!("   Colors: {}", joined(&item.colors));
    println!("   Tags: {}", joined(&item.tags));
    println!("   Seasons: {}", joined(&item.seasons));
    if let Some(fabric) = &item.fabric {
        println!("   Fabric: {fabric}");
    }
    if let Some(level) = item.formal_level {
        println!("   Formality: {level}");
    }
    if let Some(cost) = item.cost {
        println!("   Cost: {cost:.2}");
    }
    match item.last_worn {
        Some(when) => println!("   Last worn: {}", when.format("%Y-%m-%d %H:%M UTC")),
        None => println!("   Last worn: never"),
    }
    println!("   Archived: {}", yes_no(item.archived));
    println!("   Added: {}", item.created_at.format("%Y-%m-%d %H:%M UTC"));
}

/// Stored preferences
pub fn display_preferences(preferences: &Preferences) {
    let dress_codes: Vec<String> = preferences
        .dress_codes
        .iter()
        .map(|code| code.as_str().to_owned())
        .collect();

    println!("Preferences");
    println!("{}", "=".repeat(50));
    println!("   Style: {}", preferences.style_preference.as_str());
    println!("   Fit: {}", preferences.fit.as_str());
    println!("   Dress codes: {}", joined(&dress_codes));
    println!("   Avoid tags: {}", joined(&preferences.avoid_tags));
    println!("   Palette: {}", preferences.color_palette);
    println!("   Formality: {}", preferences.formality_level);
    println!("   Units: {}", preferences.units.as_str());
}

/// A weather snapshot, flagged when stale
pub fn display_weather(snapshot: &WeatherSnapshot, stale: bool) {
    let place = snapshot
        .city
        .clone()
        .unwrap_or_else(|| format!("{:.2}, {:.2}", snapshot.lat, snapshot.lon));
    println!("Weather for {place}");
    println!("{}", "=".repeat(50));
    println!(
        "   {}: {}°C (feels like {}°C, {} to {}°C)",
        snapshot.condition,
        snapshot.temp_c,
        snapshot.feels_like_c,
        snapshot.temp_min_c,
        snapshot.temp_max_c
    );
    println!("   Precipitation: {} mm", snapshot.precip_mm);
    println!("   Wind: {} km/h", snapshot.wind_kph);
    println!(
        "   Taken: {}{}",
        snapshot.taken_at.format("%Y-%m-%d %H:%M UTC"),
        if stale { " (stale)" } else { "" }
    );
}

/// An outfit with its items resolved against the wardrobe
pub fn display_outfit(outfit: &Outfit, wardrobe: &[Item]) {
    println!("Outfit {}", outfit.id);
    println!("{}", "=".repeat(50));
    for (slot, item) in outfit.resolve(wardrobe) {
        println!("   {:<10} {} ({})", slot.as_str(), item.name, item.id);
    }
    println!();
    println!("{}", outfit.explanation);
}

/// One line per outfit
pub fn display_outfit_summary(outfit: &Outfit, wardrobe: &[Item]) {
    let names: Vec<&str> = outfit
        .resolve(wardrobe)
        .into_iter()
        .map(|(_, item)| item.name.as_str())
        .collect();
    println!(
        "{}  {}  {}°C {}  {}",
        outfit.created_at.format("%Y-%m-%d %H:%M"),
        outfit.id,
        outfit.weather.temp_c,
        outfit.weather.condition,
        names.join(", ")
    );
}
