// ABOUTME: Core data models for the wardrobe platform
// ABOUTME: Re-exports Item, Preferences, WeatherSnapshot, Outfit and their enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Item`: a cataloged garment with category, warmth and wear history
//! - `Preferences`: the user's styling record
//! - `WeatherSnapshot`: a normalized weather reading
//! - `Outfit`: a recommendation referencing items by id
//! - `AppSettings`: location and onboarding state

mod item;
mod outfit;
mod preferences;
mod settings;
mod weather;

pub use item::{Category, Item, Warmth};
pub use outfit::{Outfit, OutfitItem, OutfitSlot};
pub use preferences::{
    DressCode, Fit, Preferences, StylePreference, Units, DEFAULT_COLOR_PALETTE,
    DEFAULT_FORMALITY_LEVEL,
};
pub use settings::{AppSettings, LocationMode};
pub use weather::WeatherSnapshot;
