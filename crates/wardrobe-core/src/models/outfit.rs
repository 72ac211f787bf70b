// ABOUTME: Outfit recommendation output with slot assignments and explanation
// ABOUTME: References wardrobe items by id; dangling references are dropped on resolve
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::item::{Category, Item};
use super::weather::WeatherSnapshot;
use crate::errors::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named role in an outfit; holds at most one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutfitSlot {
    /// Upper body garment
    Top,
    /// Lower body garment
    Bottom,
    /// One-piece garment in place of top and bottom
    Dress,
    /// Jacket or coat
    Outerwear,
    /// Footwear
    Shoes,
    /// Optional finishing piece
    Accessory,
}

impl OutfitSlot {
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
        }
    }

    /// Category whose items fill this slot
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Top => Category::Top,
            Self::Bottom => Category::Bottom,
            Self::Dress => Category::Dress,
            Self::Outerwear => Category::Outerwear,
            Self::Shoes => Category::Shoes,
            Self::Accessory => Category::Accessory,
        }
    }
}

impl fmt::Display for OutfitSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutfitSlot {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "dress" => Ok(Self::Dress),
            "outerwear" => Ok(Self::Outerwear),
            "shoes" => Ok(Self::Shoes),
            "accessory" => Ok(Self::Accessory),
            other => Err(ValidationError::unknown_variant("outfit slot", other)),
        }
    }
}

/// One slot assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitItem {
    /// Slot filled
    pub slot: OutfitSlot,
    /// Id of the wardrobe item in the slot
    pub item_id: String,
}

/// A recommended outfit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    /// Unique identifier
    pub id: String,
    /// Generation time
    pub created_at: DateTime<Utc>,
    /// Human-readable reasoning, one observation per line
    pub explanation: String,
    /// Slot assignments in selection order
    pub items: Vec<OutfitItem>,
    /// Weather the outfit was generated against
    pub weather: WeatherSnapshot,
}

impl Outfit {
    /// Item id assigned to `slot`, if any
    #[must_use]
    pub fn item_for_slot(&self, slot: OutfitSlot) -> Option<&str> {
        self.items
            .iter()
            .find(|entry| entry.slot == slot)
            .map(|entry| entry.item_id.as_str())
    }

    /// Whether `slot` is filled
    #[must_use]
    pub fn has_slot(&self, slot: OutfitSlot) -> bool {
        self.item_for_slot(slot).is_some()
    }

    /// Whether `item_id` is part of the outfit
    #[must_use]
    pub fn contains_item(&self, item_id: &str) -> bool {
        self.items.iter().any(|entry| entry.item_id == item_id)
    }

    /// Ids of all assigned items, in slot order
    #[must_use]
    pub fn item_ids(&self) -> Vec<&str> {
        self.items.iter().map(|entry| entry.item_id.as_str()).collect()
    }

    /// Resolve assignments against a wardrobe, skipping ids that no longer exist
    #[must_use]
    pub fn resolve<'a>(&self, wardrobe: &'a [Item]) -> Vec<(OutfitSlot, &'a Item)> {
        self.items
            .iter()
            .filter_map(|entry| {
                wardrobe
                    .iter()
                    .find(|item| item.id == entry.item_id)
                    .map(|item| (entry.slot, item))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outfit_with(ids: &[(OutfitSlot, &str)]) -> Outfit {
        Outfit {
            id: "outfit-1".into(),
            created_at: Utc::now(),
            explanation: String::new(),
            items: ids
                .iter()
                .map(|(slot, id)| OutfitItem {
                    slot: *slot,
                    item_id: (*id).to_owned(),
                })
                .collect(),
            weather: WeatherSnapshot::new(20.0, 0.0, 0.0, "Clear"),
        }
    }

    #[test]
    fn test_resolve_drops_dangling_references() {
        let tee = Item::new("Tee", Category::Top).with_id("tee");
        let outfit = outfit_with(&[(OutfitSlot::Top, "tee"), (OutfitSlot::Bottom, "gone")]);

        let resolved = outfit.resolve(std::slice::from_ref(&tee));
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].0, OutfitSlot::Top);
        assert_eq!(resolved[0].1.id, "tee");
    }

    #[test]
    fn test_slot_lookup() {
        let outfit = outfit_with(&[(OutfitSlot::Dress, "d1")]);
        assert_eq!(outfit.item_for_slot(OutfitSlot::Dress), Some("d1"));
        assert!(!outfit.has_slot(OutfitSlot::Top));
        assert!(outfit.contains_item("d1"));
    }
}
