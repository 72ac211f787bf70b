// ABOUTME: Re-exports command modules for wardrobe-cli
// ABOUTME: One module per top-level subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod item;
pub mod outfit;
pub mod prefs;
pub mod seed;
pub mod weather;
