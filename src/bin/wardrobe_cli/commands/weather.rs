// ABOUTME: Weather commands for wardrobe-cli
// ABOUTME: Stores manual snapshots, fetches from Open-Meteo, and shows the cached snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use tracing::info;
use wardrobe_core::models::{LocationMode, WeatherSnapshot};
use wardrobe_engine::{
    config::AppConfig,
    database::Database,
    errors::{AppError, AppResult},
    weather::{OpenMeteoClient, WeatherService},
};

type Result<T> = AppResult<T>;

use crate::helpers::display::display_weather;

/// Store a hand-entered snapshot as the current weather
pub async fn set(
    database: &Database,
    temp_c: f64,
    precip_mm: f64,
    wind_kph: f64,
    condition: String,
    city: Option<String>,
) -> Result<()> {
    let mut snapshot = WeatherSnapshot::new(temp_c, precip_mm, wind_kph, condition);
    snapshot.city = city;
    database.save_weather(&snapshot).await?;
    info!(temp_c, precip_mm, wind_kph, "Manual weather stored");

    display_weather(&snapshot, false);
    Ok(())
}

/// Fetch weather for explicit or saved coordinates and cache it
pub async fn fetch(
    database: &Database,
    config: &AppConfig,
    coordinates: Option<(f64, f64)>,
    city: Option<String>,
    save_location: bool,
) -> Result<()> {
    let mut settings = database.get_settings().await?;
    let (lat, lon) = coordinates
        .or_else(|| settings.manual_coordinates())
        .ok_or_else(|| {
            AppError::invalid_input(
                "No location given. Pass --lat and --lon, or save a location with --save-location",
            )
        })?;
    let city = city.or_else(|| settings.manual_city.clone());

    let service = WeatherService::new(
        OpenMeteoClient::new(&config.weather_api),
        config.weather_api.cache_expiry(),
    );
    let snapshot = service.refresh(database, lat, lon, city.clone()).await?;

    if save_location {
        settings.location_mode = LocationMode::Manual;
        settings.manual_lat = Some(lat);
        settings.manual_lon = Some(lon);
        settings.manual_city = city;
        database.save_settings(&settings).await?;
        info!(lat, lon, "Manual location saved");
    }

    display_weather(&snapshot, false);
    Ok(())
}

/// Print the cached weather and whether it is still fresh
pub async fn show(database: &Database, config: &AppConfig) -> Result<()> {
    match database.get_stored_weather().await? {
        Some(snapshot) => {
            let stale = snapshot.is_expired(Utc::now(), config.weather_api.cache_expiry());
            display_weather(&snapshot, stale);
        }
        None => println!("No weather cached. Run `wardrobe-cli weather set` or `weather fetch`."),
    }
    Ok(())
}
