// ABOUTME: Human-readable explanation assembly for recommended outfits
// ABOUTME: One weather header line followed by one line per filled slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

/// Why an item was picked for its slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    /// Waterproof outerwear chosen because of rain
    RainProtection,
    /// Windproof outerwear chosen because of wind
    WindProtection,
    /// Outerwear chosen for the temperature
    Warmth,
    /// Waterproof shoes chosen because of rain
    WaterResistant,
    /// No qualifier (top, bottom, dress, accessory, dry-weather shoes)
    Plain,
}

impl SelectionReason {
    /// Text appended after the item name
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::RainProtection => " for rain protection",
            Self::WindProtection => " for wind protection",
            Self::Warmth => " for warmth",
            Self::WaterResistant => " (water-resistant)",
            Self::Plain => "",
        }
    }
}

/// Accumulates explanation lines in selection order
#[derive(Debug, Clone, Default)]
pub struct ExplanationBuilder {
    lines: Vec<String>,
}

impl ExplanationBuilder {
    /// Start with the weather header, e.g. `Based on 10°C weather with rain and wind:`
    #[must_use]
    pub fn with_weather(temp_c: f64, has_precip: bool, has_wind: bool) -> Self {
        let mut header = format!("Based on {temp_c}°C weather");
        if has_precip {
            header.push_str(" with rain");
        }
        if has_wind {
            header.push_str(" and wind");
        }
        header.push(':');
        Self {
            lines: vec![header],
        }
    }

    /// Add the line for one filled slot
    pub fn push_item(&mut self, item_name: &str, reason: SelectionReason) {
        let mut line = String::with_capacity(item_name.len() + 24);
        // Writing to a String cannot fail
        let _ = write!(line, "- {item_name}{}", reason.suffix());
        self.lines.push(line);
    }

    /// Lines collected so far
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join into the final multi-line explanation
    #[must_use]
    pub fn build(&self) -> String {
        self.lines.join("\n")
    }
}
