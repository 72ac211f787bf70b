// ABOUTME: Wardrobe item model with category, warmth rating, and wear tracking
// ABOUTME: Items are soft-deleted via the archived flag and never selected once archived
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::warmth;
use crate::errors::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Garment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Shirts, tees, sweaters
    Top,
    /// Trousers, skirts, shorts
    Bottom,
    /// One-piece garment that replaces top and bottom
    Dress,
    /// Jackets and coats
    Outerwear,
    /// Footwear
    Shoes,
    /// Scarves, hats, bags, jewelry
    Accessory,
    /// Sportswear; cataloged but not drawn into any slot
    Athleisure,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Self; 7] = [
        Self::Top,
        Self::Bottom,
        Self::Dress,
        Self::Outerwear,
        Self::Shoes,
        Self::Accessory,
        Self::Athleisure,
    ];

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Dress => "dress",
            Self::Outerwear => "outerwear",
            Self::Shoes => "shoes",
            Self::Accessory => "accessory",
            Self::Athleisure => "athleisure",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "dress" => Ok(Self::Dress),
            "outerwear" => Ok(Self::Outerwear),
            "shoes" => Ok(Self::Shoes),
            "accessory" => Ok(Self::Accessory),
            "athleisure" => Ok(Self::Athleisure),
            other => Err(ValidationError::unknown_variant("category", other)),
        }
    }
}

/// Thermal insulation rating, 0 (none) to 5 (heaviest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Warmth(u8);

impl Warmth {
    /// Create a warmth rating
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::WarmthOutOfRange` if the value is not in 0-5
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (i64::from(warmth::MIN)..=i64::from(warmth::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::WarmthOutOfRange {
                value,
                min: warmth::MIN,
                max: warmth::MAX,
            })
        }
    }

    /// Raw rating
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Warmth {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Warmth> for u8 {
    fn from(w: Warmth) -> Self {
        w.0
    }
}

impl fmt::Display for Warmth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A garment in the user's wardrobe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: String,
    /// When the item was cataloged
    pub created_at: DateTime<Utc>,
    /// Last edit time
    pub updated_at: DateTime<Utc>,
    /// Display name
    pub name: String,
    /// Photo location, if one was captured
    #[serde(default)]
    pub photo_uri: Option<String>,
    /// Garment category
    pub category: Category,
    /// Free-text refinement of the category (e.g. "tee", "boots")
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Dominant colors as hex strings
    #[serde(default)]
    pub colors: Vec<String>,
    /// Fabric label
    #[serde(default)]
    pub fabric: Option<String>,
    /// Warmth rating; absent means unknown
    #[serde(default)]
    pub warmth: Option<Warmth>,
    /// Keeps rain out
    #[serde(default)]
    pub waterproof: bool,
    /// Keeps wind out
    #[serde(default)]
    pub windproof: bool,
    /// Free-text tags matched against avoided tags
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Seasons the item suits
    #[serde(default)]
    pub seasons: Vec<String>,
    /// Formality, 1 (casual) upwards
    #[serde(default)]
    pub formal_level: Option<u8>,
    /// Purchase cost
    #[serde(default)]
    pub cost: Option<f64>,
    /// Last time the item was part of a worn outfit
    #[serde(default)]
    pub last_worn: Option<DateTime<Utc>>,
    /// Soft-delete flag
    #[serde(default)]
    pub archived: bool,
}

impl Item {
    /// Create a new item with a fresh id and default attributes
    #[must_use]
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            name: name.into(),
            photo_uri: None,
            category,
            subcategory: None,
            colors: Vec::new(),
            fabric: None,
            warmth: None,
            waterproof: false,
            windproof: false,
            tags: BTreeSet::new(),
            seasons: Vec::new(),
            formal_level: None,
            cost: None,
            last_worn: None,
            archived: false,
        }
    }

    /// Override the generated id
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the warmth rating
    #[must_use]
    pub const fn with_warmth(mut self, warmth: Warmth) -> Self {
        self.warmth = Some(warmth);
        self
    }

    /// Mark as waterproof
    #[must_use]
    pub const fn waterproof(mut self) -> Self {
        self.waterproof = true;
        self
    }

    /// Mark as windproof
    #[must_use]
    pub const fn windproof(mut self) -> Self {
        self.windproof = true;
        self
    }

    /// Add a tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Set the last worn time
    #[must_use]
    pub const fn worn_at(mut self, when: DateTime<Utc>) -> Self {
        self.last_worn = Some(when);
        self
    }

    /// Set the archived flag
    #[must_use]
    pub const fn archived(mut self) -> Self {
        self.archived = true;
        self
    }

    /// Whether the item can be considered for an outfit
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.archived
    }

    /// Whether the item carries any of the given tags
    #[must_use]
    pub fn has_any_tag(&self, tags: &BTreeSet<String>) -> bool {
        !self.tags.is_disjoint(tags)
    }

    /// Check field-level invariants not covered by the types
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the cost is negative
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        if let Some(cost) = self.cost {
            if cost < 0.0 {
                return Err(ValidationError::Negative {
                    field: "cost",
                    value: cost,
                });
            }
        }
        Ok(())
    }
}
