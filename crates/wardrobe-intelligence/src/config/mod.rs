// ABOUTME: Configuration module for wardrobe-intelligence crate
// ABOUTME: Re-exports recommendation engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Intelligence module configuration (scoring, weather gates)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
