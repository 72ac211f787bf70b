// ABOUTME: User style preferences stored as a single record
// ABOUTME: Only avoid_tags feeds scoring; the other fields serve display and storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Overall style aesthetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StylePreference {
    /// Clean lines, few pieces
    Minimalist,
    /// Everyday relaxed
    #[default]
    Casual,
    /// Tailored and dressy
    Formal,
    /// Athletic
    Sporty,
    /// Streetwear
    Street,
    /// Polished fashion-forward
    Chic,
    /// Bold and unconventional
    Edgy,
    /// Bohemian
    Boho,
}

/// Preferred garment fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fit {
    /// Standard cut
    #[default]
    Regular,
    /// Loose cut
    Oversized,
    /// Close cut
    Slim,
}

/// Dress codes the user regularly dresses for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DressCode {
    /// Standard office
    Office,
    /// Suits and formal business wear
    BusinessFormal,
    /// Between casual and business
    SmartCasual,
    /// Off-duty
    Weekend,
    /// Gym and training
    Workout,
}

/// Measurement units for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Units {
    /// Celsius, millimeters, km/h
    #[default]
    Metric,
    /// Fahrenheit, inches, mph
    Imperial,
}

macro_rules! impl_label {
    ($ty:ty, $kind:literal, { $($variant:path => $label:literal),+ $(,)? }) => {
        impl $ty {
            /// Convert to database string representation
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($variant => $label),+
                }
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($label => Ok($variant),)+
                    other => Err(ValidationError::unknown_variant($kind, other)),
                }
            }
        }
    };
}

impl_label!(StylePreference, "style preference", {
    Self::Minimalist => "minimalist",
    Self::Casual => "casual",
    Self::Formal => "formal",
    Self::Sporty => "sporty",
    Self::Street => "street",
    Self::Chic => "chic",
    Self::Edgy => "edgy",
    Self::Boho => "boho",
});

impl_label!(Fit, "fit", {
    Self::Regular => "regular",
    Self::Oversized => "oversized",
    Self::Slim => "slim",
});

impl_label!(DressCode, "dress code", {
    Self::Office => "office",
    Self::BusinessFormal => "business_formal",
    Self::SmartCasual => "smart_casual",
    Self::Weekend => "weekend",
    Self::Workout => "workout",
});

impl_label!(Units, "units", {
    Self::Metric => "metric",
    Self::Imperial => "imperial",
});

/// Default color palette label
pub const DEFAULT_COLOR_PALETTE: &str = "neutral";
/// Default formality level (1-5)
pub const DEFAULT_FORMALITY_LEVEL: u8 = 3;

/// User styling configuration
///
/// Scoring reads `avoid_tags` only. The remaining fields are kept so the
/// record round-trips through storage unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Overall aesthetic
    #[serde(default)]
    pub style_preference: StylePreference,
    /// Preferred fit
    #[serde(default)]
    pub fit: Fit,
    /// Dress codes in regular use
    #[serde(default)]
    pub dress_codes: Vec<DressCode>,
    /// Tags to steer away from
    #[serde(default)]
    pub avoid_tags: BTreeSet<String>,
    /// Color palette label
    #[serde(default = "default_color_palette")]
    pub color_palette: String,
    /// Formality level, 1 (casual) to 5 (formal)
    #[serde(default = "default_formality_level")]
    pub formality_level: u8,
    /// Display units
    #[serde(default)]
    pub units: Units,
}

fn default_color_palette() -> String {
    DEFAULT_COLOR_PALETTE.to_owned()
}

const fn default_formality_level() -> u8 {
    DEFAULT_FORMALITY_LEVEL
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            style_preference: StylePreference::Casual,
            fit: Fit::Regular,
            dress_codes: vec![DressCode::SmartCasual, DressCode::Weekend],
            avoid_tags: BTreeSet::new(),
            color_palette: default_color_palette(),
            formality_level: DEFAULT_FORMALITY_LEVEL,
            units: Units::Metric,
        }
    }
}

impl Preferences {
    /// Replace the avoided tags
    #[must_use]
    pub fn with_avoid_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.avoid_tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
