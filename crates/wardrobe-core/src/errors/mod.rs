// ABOUTME: Domain error types for outfit recommendation and model validation
// ABOUTME: Raised synchronously by the engine and by model constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Domain Errors
//!
//! - `RecommendationError` - the two failure kinds of the outfit recommender
//! - `ValidationError` - rejected model values (warmth range, unknown enum labels)

use thiserror::Error;

/// Failures raised by the outfit recommender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecommendationError {
    /// The wardrobe has no non-archived items
    #[error("No items available in wardrobe")]
    EmptyWardrobe,

    /// Every slot was skipped, so the outfit would be empty
    #[error("Could not build a complete outfit")]
    IncompleteOutfit,
}

/// Model validation failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Warmth rating outside 0-5
    #[error("Warmth must be between {min} and {max}, got {value}")]
    WarmthOutOfRange {
        /// Rejected value
        value: i64,
        /// Lowest accepted value
        min: u8,
        /// Highest accepted value
        max: u8,
    },

    /// Label that does not name a known enum variant
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant {
        /// Name of the enum being parsed
        kind: &'static str,
        /// Rejected label
        value: String,
    },

    /// Required text field is empty
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// Numeric field that must be non-negative was negative
    #[error("Field '{field}' must be non-negative, got {value}")]
    Negative {
        /// Field name
        field: &'static str,
        /// Rejected value
        value: f64,
    },
}

impl ValidationError {
    /// Create an "unknown variant" error
    #[must_use]
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}
