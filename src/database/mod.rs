// ABOUTME: SQLite storage for items, preferences, weather cache, outfits, and settings
// ABOUTME: Owns the connection pool and creates the schema on startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! JSON text columns hold list-valued fields; timestamps are stored as
//! milliseconds since the Unix epoch. Preferences, weather and settings
//! are singleton rows with `id = 1`.

mod items;
mod outfits;
mod preferences;
mod repository;
mod settings;
mod weather;

/// Demo wardrobe for first runs
pub mod seed;

pub use repository::WardrobeRepository;

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, TimeZone, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

/// Database manager for wardrobe storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to `database_url` and run migrations
    ///
    /// File databases are created if missing, including their directory.
    /// In-memory databases use a single long-lived connection so every
    /// query sees the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or a
    /// migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::config(format!("Invalid database URL '{database_url}': {e}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        let in_memory = database_url.contains(":memory:");
        if !in_memory {
            if let Some(parent) = options.get_filename().parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        AppError::database(format!(
                            "Failed to create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
        }

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;
        info!(in_memory, "Database ready");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table cannot be created
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_items().await?;
        self.migrate_preferences().await?;
        self.migrate_weather().await?;
        self.migrate_outfits().await?;
        self.migrate_settings().await?;
        debug!("Database migrations complete");
        Ok(())
    }
}

/// Milliseconds since the epoch for storage
pub(crate) fn to_millis(timestamp: DateTime<Utc>) -> i64 {
    timestamp.timestamp_millis()
}

/// Timestamp from stored milliseconds
pub(crate) fn from_millis(millis: i64) -> AppResult<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| AppError::database(format!("Invalid stored timestamp: {millis}")))
}
