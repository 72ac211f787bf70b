// ABOUTME: Unified application error type with stable error codes
// ABOUTME: Converts engine, storage, weather, swap, and config failures into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every fallible operation outside the engine returns [`AppResult`]. Lower
//! layers keep their own `thiserror` enums; the `From` impls below fold
//! them into an [`AppError`] carrying a stable [`ErrorCode`].

use crate::weather::WeatherError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use wardrobe_core::errors::{RecommendationError, ValidationError};
use wardrobe_intelligence::{ConfigError, SwapError};

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Malformed or unacceptable input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Numeric value outside its allowed range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Item, outfit, or cached weather not found
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Recommendation (4500-4599)
    /// No non-archived items to recommend from
    #[serde(rename = "EMPTY_WARDROBE")]
    EmptyWardrobe = 4500,
    /// No slot could be filled
    #[serde(rename = "INCOMPLETE_OUTFIT")]
    IncompleteOutfit = 4501,

    // External Services (5000-5999)
    /// No usable weather snapshot
    #[serde(rename = "WEATHER_UNAVAILABLE")]
    WeatherUnavailable = 5004,
    /// Upstream API failure
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,

    // Configuration (6000-6999)
    /// Invalid or unparsable configuration
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// Unexpected failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// SQLite failure
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9001,
    /// JSON encode/decode failure
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::EmptyWardrobe => {
                "Your wardrobe is empty. Add your first item to get outfit suggestions"
            }
            Self::IncompleteOutfit => "Could not build a complete outfit from your wardrobe",
            Self::WeatherUnavailable => {
                "Weather data is unavailable. Set or fetch the weather first"
            }
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
            Self::DatabaseError => "Database operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Process exit status for the CLI
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput | Self::ValueOutOfRange | Self::ConfigError => 2,
            Self::ResourceNotFound | Self::EmptyWardrobe | Self::IncompleteOutfit => 3,
            Self::WeatherUnavailable | Self::ExternalServiceError => 4,
            Self::InternalError | Self::DatabaseError | Self::SerializationError => 1,
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Identifier of the resource involved, if any
    pub resource_id: Option<String>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            resource_id: None,
        }
    }

    /// Attach the id of the resource involved
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Database error
    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// No weather snapshot to recommend against
    #[must_use]
    pub fn weather_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::WeatherUnavailable, message)
    }

    /// External service error
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<RecommendationError> for AppError {
    fn from(error: RecommendationError) -> Self {
        let code = match error {
            RecommendationError::EmptyWardrobe => ErrorCode::EmptyWardrobe,
            RecommendationError::IncompleteOutfit => ErrorCode::IncompleteOutfit,
        };
        Self::new(code, error.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let code = match error {
            ValidationError::WarmthOutOfRange { .. } | ValidationError::Negative { .. } => {
                ErrorCode::ValueOutOfRange
            }
            _ => ErrorCode::InvalidInput,
        };
        Self::new(code, error.to_string())
    }
}

impl From<SwapError> for AppError {
    fn from(error: SwapError) -> Self {
        match &error {
            SwapError::ItemNotInOutfit { item_id } => {
                Self::new(ErrorCode::InvalidInput, error.to_string()).with_resource_id(item_id)
            }
            SwapError::NoAlternative { item_id } => {
                Self::new(ErrorCode::ResourceNotFound, error.to_string()).with_resource_id(item_id)
            }
            SwapError::CategoryMismatch { replacement_id, .. } => {
                Self::new(ErrorCode::InvalidInput, error.to_string())
                    .with_resource_id(replacement_id)
            }
        }
    }
}

impl From<WeatherError> for AppError {
    fn from(error: WeatherError) -> Self {
        match error {
            WeatherError::InvalidCoordinates { .. } => {
                Self::new(ErrorCode::ValueOutOfRange, error.to_string())
            }
            _ => Self::external_service("open-meteo", error.to_string()),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::not_found("Row"),
            other => Self::database(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string())
    }
}
