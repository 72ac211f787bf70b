// ABOUTME: Wardrobe CLI - command-line front end for the wardrobe outfit engine
// ABOUTME: Manages items, preferences and weather, and requests or swaps daily outfits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Load a demo wardrobe
//! wardrobe-cli seed
//!
//! # Add an item
//! wardrobe-cli item add "Navy Peacoat" --category outerwear --warmth 4 --windproof
//!
//! # Record today's weather, by hand or from Open-Meteo
//! wardrobe-cli weather set --temp 9 --precip 0.4 --wind 12 --condition Drizzle
//! wardrobe-cli weather fetch --lat 51.51 --lon -0.13
//!
//! # Get today's outfit and swap an item that is in the laundry
//! wardrobe-cli outfit recommend
//! wardrobe-cli outfit laundry <outfit-id> <item-id>
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::{debug, error};
use wardrobe_engine::{
    config::AppConfig, database::Database, errors::AppResult, logging::LoggingConfig,
};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "wardrobe-cli",
    about = "Wardrobe outfit engine CLI",
    long_about = "Manage a local wardrobe and get weather-aware daily outfit recommendations."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Wardrobe item management
    Item {
        #[command(subcommand)]
        action: ItemCommand,
    },

    /// Style preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsCommand,
    },

    /// Cached weather
    Weather {
        #[command(subcommand)]
        action: WeatherCommand,
    },

    /// Outfit recommendations and swaps
    Outfit {
        #[command(subcommand)]
        action: OutfitCommand,
    },

    /// Insert a demo wardrobe if the wardrobe is empty
    Seed,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ItemCommand {
    /// Add an item
    Add {
        /// Display name
        name: String,

        /// top, bottom, dress, outerwear, shoes, accessory or athleisure
        #[arg(long, short = 'c')]
        category: String,

        /// Free-form subcategory (e.g. "chinos")
        #[arg(long)]
        subcategory: Option<String>,

        /// Warmth rating 0-5
        #[arg(long)]
        warmth: Option<i64>,

        /// Item keeps rain out
        #[arg(long)]
        waterproof: bool,

        /// Item blocks wind
        #[arg(long)]
        windproof: bool,

        /// Color, repeatable
        #[arg(long = "color")]
        colors: Vec<String>,

        /// Tag, repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Season, repeatable
        #[arg(long = "season")]
        seasons: Vec<String>,

        /// Fabric
        #[arg(long)]
        fabric: Option<String>,

        /// Formality 1-5
        #[arg(long)]
        formal_level: Option<u8>,

        /// Purchase cost
        #[arg(long)]
        cost: Option<f64>,

        /// Photo location
        #[arg(long)]
        photo_uri: Option<String>,
    },

    /// List items
    List {
        /// Only this category
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Include archived items
        #[arg(long)]
        all: bool,
    },

    /// Show one item
    Show {
        /// Item ID
        item_id: String,
    },

    /// Archive an item so it is no longer recommended
    Archive {
        /// Item ID
        item_id: String,
    },

    /// Permanently delete an item
    Delete {
        /// Item ID
        item_id: String,
    },

    /// Mark an item as worn now
    Worn {
        /// Item ID
        item_id: String,
    },

    /// Search by name, category or subcategory
    Search {
        /// Substring to look for
        query: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PrefsCommand {
    /// Show current preferences
    Show,

    /// Update preferences; unspecified fields keep their value
    Set {
        /// minimalist, casual, formal, sporty, street, chic, edgy or boho
        #[arg(long)]
        style: Option<String>,

        /// regular, oversized or slim
        #[arg(long)]
        fit: Option<String>,

        /// office, business_formal, smart_casual, weekend or workout;
        /// repeatable, replaces the current list
        #[arg(long = "dress-code")]
        dress_codes: Vec<String>,

        /// Tag to avoid, repeatable; replaces the current list
        #[arg(long = "avoid-tag")]
        avoid_tags: Vec<String>,

        /// Remove all avoided tags
        #[arg(long, conflicts_with = "avoid_tags")]
        clear_avoid_tags: bool,

        /// Color palette name
        #[arg(long)]
        palette: Option<String>,

        /// Formality 1-5
        #[arg(long)]
        formality: Option<u8>,

        /// metric or imperial
        #[arg(long)]
        units: Option<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WeatherCommand {
    /// Store a weather snapshot entered by hand
    Set {
        /// Current temperature (°C)
        #[arg(long, allow_hyphen_values = true)]
        temp: f64,

        /// Precipitation (mm)
        #[arg(long, default_value = "0")]
        precip: f64,

        /// Wind speed (km/h)
        #[arg(long, default_value = "0")]
        wind: f64,

        /// Condition label
        #[arg(long, default_value = "Manual")]
        condition: String,

        /// City label
        #[arg(long)]
        city: Option<String>,
    },

    /// Fetch current weather from Open-Meteo and cache it
    Fetch {
        /// Latitude; defaults to the manual location in settings
        #[arg(long, allow_hyphen_values = true, requires = "lon")]
        lat: Option<f64>,

        /// Longitude; defaults to the manual location in settings
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,

        /// City label stored with the snapshot
        #[arg(long)]
        city: Option<String>,

        /// Remember these coordinates as the manual location
        #[arg(long)]
        save_location: bool,
    },

    /// Show the cached weather
    Show,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum OutfitCommand {
    /// Recommend today's outfit and mark its items worn
    Recommend {
        /// Fetch weather for the saved location when the cache is stale
        #[arg(long)]
        refresh_weather: bool,
    },

    /// Show the most recent outfit
    Latest,

    /// Show an outfit
    Show {
        /// Outfit ID
        outfit_id: String,
    },

    /// List recent outfits
    List {
        /// Number of outfits to show
        #[arg(long, default_value = "10")]
        limit: u32,
    },

    /// Replace an item with a random alternative from the same category
    Laundry {
        /// Outfit ID
        outfit_id: String,

        /// Item to replace
        item_id: String,
    },

    /// Replace an item with a chosen item from the same category
    Swap {
        /// Outfit ID
        outfit_id: String,

        /// Item to replace
        item_id: String,

        /// Replacement item ID
        replacement_id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e:#}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{}", e.message);
            eprintln!("Error: {e}");
            ExitCode::from(e.code.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(url) = cli.database_url {
        config = config.with_database_url(url);
        config.validate()?;
    }

    debug!("Connecting to database: {}", config.database.url);
    let database = Database::new(&config.database.url).await?;

    match cli.command {
        Command::Item { action } => run_item(&database, action).await,
        Command::Prefs { action } => match action {
            PrefsCommand::Show => commands::prefs::show(&database).await,
            PrefsCommand::Set {
                style,
                fit,
                dress_codes,
                avoid_tags,
                clear_avoid_tags,
                palette,
                formality,
                units,
            } => {
                let update = commands::prefs::PreferenceUpdate {
                    style,
                    fit,
                    dress_codes,
                    avoid_tags,
                    clear_avoid_tags,
                    palette,
                    formality,
                    units,
                };
                commands::prefs::set(&database, update).await
            }
        },
        Command::Weather { action } => match action {
            WeatherCommand::Set {
                temp,
                precip,
                wind,
                condition,
                city,
            } => commands::weather::set(&database, temp, precip, wind, condition, city).await,
            WeatherCommand::Fetch {
                lat,
                lon,
                city,
                save_location,
            } => {
                let coordinates = lat.zip(lon);
                commands::weather::fetch(&database, &config, coordinates, city, save_location)
                    .await
            }
            WeatherCommand::Show => commands::weather::show(&database, &config).await,
        },
        Command::Outfit { action } => run_outfit(database, &config, action).await,
        Command::Seed => commands::seed::run(&database).await,
    }
}

async fn run_item(database: &Database, action: ItemCommand) -> Result<()> {
    match action {
        ItemCommand::Add {
            name,
            category,
            subcategory,
            warmth,
            waterproof,
            windproof,
            colors,
            tags,
            seasons,
            fabric,
            formal_level,
            cost,
            photo_uri,
        } => {
            let draft = commands::item::NewItem {
                name,
                category,
                subcategory,
                warmth,
                waterproof,
                windproof,
                colors,
                tags,
                seasons,
                fabric,
                formal_level,
                cost,
                photo_uri,
            };
            commands::item::add(database, draft).await
        }
        ItemCommand::List { category, all } => {
            commands::item::list(database, category.as_deref(), all).await
        }
        ItemCommand::Show { item_id } => commands::item::show(database, &item_id).await,
        ItemCommand::Archive { item_id } => commands::item::archive(database, &item_id).await,
        ItemCommand::Delete { item_id } => commands::item::delete(database, &item_id).await,
        ItemCommand::Worn { item_id } => commands::item::worn(database, &item_id).await,
        ItemCommand::Search { query } => commands::item::search(database, &query).await,
    }
}

async fn run_outfit(database: Database, config: &AppConfig, action: OutfitCommand) -> Result<()> {
    match action {
        OutfitCommand::Recommend { refresh_weather } => {
            commands::outfit::recommend(database, config, refresh_weather).await
        }
        OutfitCommand::Latest => commands::outfit::latest(&database).await,
        OutfitCommand::Show { outfit_id } => commands::outfit::show(&database, &outfit_id).await,
        OutfitCommand::List { limit } => commands::outfit::list(&database, limit).await,
        OutfitCommand::Laundry { outfit_id, item_id } => {
            commands::outfit::laundry(database, config, &outfit_id, &item_id).await
        }
        OutfitCommand::Swap {
            outfit_id,
            item_id,
            replacement_id,
        } => {
            commands::outfit::swap(database, config, &outfit_id, &item_id, &replacement_id).await
        }
    }
}
