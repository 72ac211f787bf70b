// ABOUTME: Weather cache database operations for the singleton snapshot row
// ABOUTME: Snapshots older than the configured expiry read back as absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{from_millis, to_millis, Database};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use sqlx::Row;
use tracing::debug;
use wardrobe_core::models::WeatherSnapshot;

impl Database {
    /// Create weather table
    pub(super) async fn migrate_weather(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS weather (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                taken_at INTEGER NOT NULL,
                lat REAL NOT NULL,
                lon REAL NOT NULL,
                city TEXT,
                temp_c REAL NOT NULL,
                temp_min_c REAL NOT NULL,
                temp_max_c REAL NOT NULL,
                feels_like_c REAL NOT NULL,
                wind_kph REAL NOT NULL,
                precip_mm REAL NOT NULL,
                condition TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// The stored snapshot regardless of age
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    pub async fn get_stored_weather(&self) -> AppResult<Option<WeatherSnapshot>> {
        let row = sqlx::query(
            r"
            SELECT taken_at, lat, lon, city, temp_c, temp_min_c, temp_max_c,
                   feels_like_c, wind_kph, precip_mm, condition
            FROM weather
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get weather: {e}")))?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(WeatherSnapshot {
            taken_at: from_millis(row.try_get("taken_at")?)?,
            lat: row.try_get("lat")?,
            lon: row.try_get("lon")?,
            city: row.try_get("city")?,
            temp_c: row.try_get("temp_c")?,
            temp_min_c: row.try_get("temp_min_c")?,
            temp_max_c: row.try_get("temp_max_c")?,
            feels_like_c: row.try_get("feels_like_c")?,
            wind_kph: row.try_get("wind_kph")?,
            precip_mm: row.try_get("precip_mm")?,
            condition: row.try_get("condition")?,
        }))
    }

    /// The stored snapshot if it is no older than `max_age` at `now`
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    pub async fn get_fresh_weather(
        &self,
        now: DateTime<Utc>,
        max_age: Duration,
    ) -> AppResult<Option<WeatherSnapshot>> {
        let snapshot = self.get_stored_weather().await?;
        Ok(snapshot.filter(|weather| {
            let expired = weather.is_expired(now, max_age);
            if expired {
                debug!(taken_at = %weather.taken_at, "Cached weather expired");
            }
            !expired
        }))
    }

    /// Replace the cached snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot fails validation or the write fails
    pub async fn save_weather(&self, weather: &WeatherSnapshot) -> AppResult<()> {
        weather.validate()?;

        sqlx::query(
            r"
            INSERT OR REPLACE INTO weather (
                id, taken_at, lat, lon, city, temp_c, temp_min_c, temp_max_c,
                feels_like_c, wind_kph, precip_mm, condition
            ) VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            ",
        )
        .bind(to_millis(weather.taken_at))
        .bind(weather.lat)
        .bind(weather.lon)
        .bind(&weather.city)
        .bind(weather.temp_c)
        .bind(weather.temp_min_c)
        .bind(weather.temp_max_c)
        .bind(weather.feels_like_c)
        .bind(weather.wind_kph)
        .bind(weather.precip_mm)
        .bind(&weather.condition)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save weather: {e}")))?;

        debug!(temp_c = weather.temp_c, condition = %weather.condition, "Weather cached");
        Ok(())
    }
}
