// ABOUTME: Demo data command for wardrobe-cli
// ABOUTME: Seeds a starter wardrobe when no items exist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use wardrobe_engine::{database::Database, errors::AppResult};

type Result<T> = AppResult<T>;

/// Insert the demo wardrobe unless items already exist
pub async fn run(database: &Database) -> Result<()> {
    let inserted = database.seed_demo_wardrobe().await?;
    if inserted == 0 {
        println!("Wardrobe already has items; nothing seeded.");
    } else {
        println!("Seeded {inserted} demo items.");
    }
    Ok(())
}
