// ABOUTME: Open-Meteo forecast client producing normalized weather snapshots
// ABOUTME: Rounds temperatures, converts wind to km/h, and maps WMO weather codes to labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{validate_coordinates, WeatherError, WeatherProvider};
use crate::config::WeatherApiConfig;
use crate::constants::{defaults, units::MS_TO_KMH_FACTOR};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use wardrobe_core::models::WeatherSnapshot;

/// Human-readable label for a WMO weather code
#[must_use]
pub const fn condition_from_code(code: i64) -> &'static str {
    match code {
        0 => "Clear",
        1..=3 => "Partly Cloudy",
        4..=48 => "Foggy",
        49..=57 => "Drizzle",
        58..=67 => "Rain",
        68..=77 => "Snow",
        78..=82 => "Showers",
        83..=86 => "Snow Showers",
        87..=99 => "Thunderstorm",
        _ => "Unknown",
    }
}

/// Round a coordinate to two decimal places
#[must_use]
pub fn round_coordinate(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `current` block of a forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    /// Air temperature at 2m (°C)
    pub temperature_2m: f64,
    /// Apparent temperature (°C)
    pub apparent_temperature: f64,
    /// Precipitation in the last interval (mm)
    #[serde(default)]
    pub precipitation: Option<f64>,
    /// Wind speed at 10m (m/s, as requested)
    pub wind_speed_10m: f64,
    /// WMO weather code
    pub weather_code: i64,
}

/// `daily` block of a forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct DailyRange {
    /// Daily maxima, today first
    pub temperature_2m_max: Vec<f64>,
    /// Daily minima, today first
    pub temperature_2m_min: Vec<f64>,
}

/// Forecast response subset
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// Current conditions
    pub current: CurrentConditions,
    /// Daily temperature range
    pub daily: DailyRange,
}

impl ForecastResponse {
    /// Normalize into a snapshot for the given request location
    ///
    /// # Errors
    ///
    /// Returns `InvalidResponse` when the daily range is empty
    pub fn into_snapshot(
        self,
        lat: f64,
        lon: f64,
        taken_at: DateTime<Utc>,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let temp_min = self
            .daily
            .temperature_2m_min
            .first()
            .copied()
            .ok_or_else(|| WeatherError::InvalidResponse("missing daily minimum".into()))?;
        let temp_max = self
            .daily
            .temperature_2m_max
            .first()
            .copied()
            .ok_or_else(|| WeatherError::InvalidResponse("missing daily maximum".into()))?;

        Ok(WeatherSnapshot {
            taken_at,
            lat: round_coordinate(lat),
            lon: round_coordinate(lon),
            city: None,
            temp_c: self.current.temperature_2m.round(),
            temp_min_c: temp_min.round(),
            temp_max_c: temp_max.round(),
            feels_like_c: self.current.apparent_temperature.round(),
            wind_kph: (self.current.wind_speed_10m * MS_TO_KMH_FACTOR).round(),
            precip_mm: self.current.precipitation.unwrap_or(0.0),
            condition: condition_from_code(self.current.weather_code).to_owned(),
        })
    }
}

/// Open-Meteo HTTP client
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoClient {
    /// Create a client from configuration
    #[must_use]
    pub fn new(config: &WeatherApiConfig) -> Self {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(defaults::WEATHER_CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        }
    }

    async fn get_json<T>(&self, url: &str, query: &[(&str, String)]) -> Result<T, WeatherError>
    where
        T: for<'de> Deserialize<'de>,
    {
        debug!("Fetching weather data from: {}", url);
        let response = self.client.get(url).query(query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            return Err(WeatherError::ApiError(format!(
                "Open-Meteo returned status {status}: {error_text}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WeatherError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    async fn current_weather(&self, lat: f64, lon: f64) -> Result<WeatherSnapshot, WeatherError> {
        validate_coordinates(lat, lon)?;

        let url = format!("{}/v1/forecast", self.base_url);
        let query = [
            ("latitude", lat.to_string()),
            ("longitude", lon.to_string()),
            (
                "current",
                "temperature_2m,apparent_temperature,precipitation,wind_speed_10m,weather_code"
                    .to_owned(),
            ),
            ("daily", "temperature_2m_max,temperature_2m_min".to_owned()),
            ("wind_speed_unit", "ms".to_owned()),
            ("timezone", "auto".to_owned()),
        ];

        let forecast: ForecastResponse = self.get_json(&url, &query).await?;
        forecast.into_snapshot(lat, lon, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_code_boundaries() {
        let cases = [
            (0, "Clear"),
            (1, "Partly Cloudy"),
            (3, "Partly Cloudy"),
            (45, "Foggy"),
            (48, "Foggy"),
            (51, "Drizzle"),
            (57, "Drizzle"),
            (61, "Rain"),
            (67, "Rain"),
            (71, "Snow"),
            (77, "Snow"),
            (80, "Showers"),
            (82, "Showers"),
            (85, "Snow Showers"),
            (86, "Snow Showers"),
            (95, "Thunderstorm"),
            (99, "Thunderstorm"),
            (100, "Unknown"),
            (-1, "Unknown"),
        ];
        for (code, label) in cases {
            assert_eq!(condition_from_code(code), label, "code {code}");
        }
    }

    #[test]
    fn test_round_coordinate() {
        assert!((round_coordinate(51.50735) - 51.51).abs() < 1e-9);
        assert!((round_coordinate(-0.12776) - -0.13).abs() < 1e-9);
    }
}
