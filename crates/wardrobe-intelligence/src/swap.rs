// ABOUTME: Item swap utilities for replacing one piece of an existing outfit
// ABOUTME: Includes the random laundry swap, which is deliberately non-deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Outfit swaps
//!
//! These helpers edit a recommendation after the fact. Unlike the
//! recommender they may draw on randomness: `laundry_swap` takes the
//! RNG as a parameter so tests can seed it.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use wardrobe_core::models::{Category, Item, Outfit};

/// Swap failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    /// The item id does not appear in the outfit
    #[error("Item {item_id} is not part of outfit")]
    ItemNotInOutfit {
        /// Requested item id
        item_id: String,
    },

    /// No other wardrobe item can stand in for the one being replaced
    #[error("No alternative available for item {item_id}")]
    NoAlternative {
        /// Item that could not be replaced
        item_id: String,
    },

    /// Replacement belongs to a different category than the slot
    #[error("Item {replacement_id} is a {actual}, expected {expected}")]
    CategoryMismatch {
        /// Replacement item id
        replacement_id: String,
        /// Category the slot requires
        expected: Category,
        /// Category of the replacement
        actual: Category,
    },
}

/// Non-archived items that could replace `item_id` in `outfit`
///
/// Candidates share the slot's category and are not already worn in the
/// outfit. Wardrobe order is preserved.
///
/// # Errors
///
/// Returns `ItemNotInOutfit` when `item_id` is not in the outfit
pub fn alternatives_for<'a>(
    outfit: &Outfit,
    item_id: &str,
    wardrobe: &'a [Item],
) -> Result<Vec<&'a Item>, SwapError> {
    let entry = outfit
        .items
        .iter()
        .find(|entry| entry.item_id == item_id)
        .ok_or_else(|| SwapError::ItemNotInOutfit {
            item_id: item_id.to_owned(),
        })?;
    let category = entry.slot.category();

    Ok(wardrobe
        .iter()
        .filter(|item| item.is_active())
        .filter(|item| item.category == category)
        .filter(|item| !outfit.contains_item(&item.id))
        .collect())
}

/// Copy of `outfit` with `item_id` replaced by `replacement` in the same slot
///
/// # Errors
///
/// Returns `ItemNotInOutfit` when `item_id` is not in the outfit and
/// `CategoryMismatch` when the replacement does not fit the slot
pub fn swap_item(outfit: &Outfit, item_id: &str, replacement: &Item) -> Result<Outfit, SwapError> {
    let mut swapped = outfit.clone();
    let entry = swapped
        .items
        .iter_mut()
        .find(|entry| entry.item_id == item_id)
        .ok_or_else(|| SwapError::ItemNotInOutfit {
            item_id: item_id.to_owned(),
        })?;

    let expected = entry.slot.category();
    if replacement.category != expected {
        return Err(SwapError::CategoryMismatch {
            replacement_id: replacement.id.clone(),
            expected,
            actual: replacement.category,
        });
    }

    entry.item_id.clone_from(&replacement.id);
    Ok(swapped)
}

/// Replace `item_id` with a uniformly random alternative ("it's in the laundry")
///
/// # Errors
///
/// Returns `ItemNotInOutfit` when `item_id` is not in the outfit and
/// `NoAlternative` when nothing else in the wardrobe fits the slot
pub fn laundry_swap<R>(
    outfit: &Outfit,
    item_id: &str,
    wardrobe: &[Item],
    rng: &mut R,
) -> Result<Outfit, SwapError>
where
    R: Rng + ?Sized,
{
    let alternatives = alternatives_for(outfit, item_id, wardrobe)?;
    let replacement = alternatives
        .choose(rng)
        .ok_or_else(|| SwapError::NoAlternative {
            item_id: item_id.to_owned(),
        })?;
    swap_item(outfit, item_id, replacement)
}
