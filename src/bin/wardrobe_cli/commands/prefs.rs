// ABOUTME: Preference commands for wardrobe-cli
// ABOUTME: Shows and partially updates the stored style preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::info;
use wardrobe_core::models::{DressCode, Preferences};
use wardrobe_engine::{
    database::Database,
    errors::{AppError, AppResult},
};

type Result<T> = AppResult<T>;

use crate::helpers::display::display_preferences;

/// Fields accepted by `prefs set`; `None` and empty lists keep the stored value
pub struct PreferenceUpdate {
    pub style: Option<String>,
    pub fit: Option<String>,
    pub dress_codes: Vec<String>,
    pub avoid_tags: Vec<String>,
    pub clear_avoid_tags: bool,
    pub palette: Option<String>,
    pub formality: Option<u8>,
    pub units: Option<String>,
}

impl PreferenceUpdate {
    fn apply(self, mut preferences: Preferences) -> Result<Preferences> {
        if let Some(style) = self.style {
            preferences.style_preference = style.parse()?;
        }
        if let Some(fit) = self.fit {
            preferences.fit = fit.parse()?;
        }
        if !self.dress_codes.is_empty() {
            preferences.dress_codes = self
                .dress_codes
                .iter()
                .map(|code| code.parse::<DressCode>())
                .collect::<std::result::Result<_, _>>()?;
        }
        if self.clear_avoid_tags {
            preferences.avoid_tags.clear();
        } else if !self.avoid_tags.is_empty() {
            preferences = preferences.with_avoid_tags(self.avoid_tags);
        }
        if let Some(palette) = self.palette {
            preferences.color_palette = palette;
        }
        if let Some(formality) = self.formality {
            if !(1..=5).contains(&formality) {
                return Err(AppError::invalid_input(format!(
                    "Formality must be between 1 and 5, got {formality}"
                )));
            }
            preferences.formality_level = formality;
        }
        if let Some(units) = self.units {
            preferences.units = units.parse()?;
        }
        Ok(preferences)
    }
}

/// Print the stored preferences
pub async fn show(database: &Database) -> Result<()> {
    let preferences = database.get_preferences().await?;
    display_preferences(&preferences);
    Ok(())
}

/// Merge `update` into the stored preferences
pub async fn set(database: &Database, update: PreferenceUpdate) -> Result<()> {
    let current = database.get_preferences().await?;
    let updated = update.apply(current)?;
    database.save_preferences(&updated).await?;
    info!(avoid_tags = updated.avoid_tags.len(), "Preferences updated");

    display_preferences(&updated);
    Ok(())
}
