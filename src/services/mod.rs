// ABOUTME: Domain service layer coordinating storage, weather and the recommender
// ABOUTME: Keeps the CLI thin by owning the multi-step outfit workflows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services hold the workflows that touch more than one store: recommending
//! and recording an outfit, and swapping items in a saved outfit.

/// Daily outfit recommendation and swaps
pub mod outfit_service;

pub use outfit_service::OutfitService;
