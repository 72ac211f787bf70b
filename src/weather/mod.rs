// ABOUTME: Weather provider abstraction and cache-or-fetch weather service
// ABOUTME: Providers produce normalized snapshots; the service reuses fresh cached ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weather integration
//!
//! The recommender never talks to a weather API. The CLI and service layer
//! refresh the singleton cache through a [`WeatherProvider`] and the
//! recommendation reads the cache.

/// Open-Meteo client
pub mod open_meteo;

pub use open_meteo::{condition_from_code, OpenMeteoClient};

use crate::database::WardrobeRepository;
use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tracing::{debug, info};
use wardrobe_core::models::WeatherSnapshot;

/// Weather service errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Weather API request failed
    #[error("Weather API request failed: {0}")]
    ApiError(String),

    /// Invalid coordinate values provided
    #[error("Invalid coordinates: lat={lat}, lon={lon}")]
    InvalidCoordinates {
        /// Latitude value
        lat: f64,
        /// Longitude value
        lon: f64,
    },

    /// Response body did not have the expected shape
    #[error("Invalid weather response: {0}")]
    InvalidResponse(String),

    /// Network communication error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

/// Check that coordinates are on the globe
///
/// # Errors
///
/// Returns `InvalidCoordinates` when latitude is outside -90..=90, longitude
/// outside -180..=180, or either is not finite
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), WeatherError> {
    let valid = lat.is_finite()
        && lon.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lon);
    if valid {
        Ok(())
    } else {
        Err(WeatherError::InvalidCoordinates { lat, lon })
    }
}

/// Source of current weather
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions at a location
    async fn current_weather(&self, lat: f64, lon: f64) -> Result<WeatherSnapshot, WeatherError>;
}

/// Reuses a fresh cached snapshot or fetches and caches a new one
pub struct WeatherService<P> {
    provider: P,
    cache_expiry: Duration,
}

impl<P: WeatherProvider> WeatherService<P> {
    /// Create a service over `provider` with the given cache lifetime
    #[must_use]
    pub const fn new(provider: P, cache_expiry: Duration) -> Self {
        Self {
            provider,
            cache_expiry,
        }
    }

    /// Cached weather if fresh, otherwise fetch for the coordinates and cache it
    ///
    /// # Errors
    ///
    /// Returns an error if the cache cannot be read or written, or the fetch fails
    pub async fn current_or_fetch<R>(
        &self,
        repository: &R,
        lat: f64,
        lon: f64,
        now: DateTime<Utc>,
    ) -> AppResult<WeatherSnapshot>
    where
        R: WardrobeRepository + ?Sized,
    {
        if let Some(cached) = repository.get_cached_weather(now, self.cache_expiry).await? {
            debug!(taken_at = %cached.taken_at, "Using cached weather");
            return Ok(cached);
        }
        self.refresh(repository, lat, lon, None).await
    }

    /// Fetch for the coordinates and cache the result unconditionally
    ///
    /// `city` is stored as a display label only.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or cache write fails
    pub async fn refresh<R>(
        &self,
        repository: &R,
        lat: f64,
        lon: f64,
        city: Option<String>,
    ) -> AppResult<WeatherSnapshot>
    where
        R: WardrobeRepository + ?Sized,
    {
        validate_coordinates(lat, lon)?;
        let mut snapshot = self.provider.current_weather(lat, lon).await?;
        if city.is_some() {
            snapshot.city = city;
        }
        repository.save_weather(&snapshot).await?;
        info!(
            temp_c = snapshot.temp_c,
            condition = %snapshot.condition,
            "Weather refreshed"
        );
        Ok(snapshot)
    }
}
