//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database
//! - `cmd_status` - Show row counts
//! - `cmd_serve` - Start the API server

use std::path::Path;

use anyhow::{Context, Result};
use gigcoach_core::db::Database;

/// Open (and migrate) the database
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    tracing::debug!(path = path_str, "Opening database");
    Database::new(path_str).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    open_db(db_path)?;

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Register a user:  gigcoach users add +911234567890");
    println!("  2. Record earnings:  gigcoach earnings add +911234567890 --date 2025-05-01 --amount 18000");
    println!("  3. Start the server: gigcoach serve");

    Ok(())
}

pub fn cmd_status(db_path: &Path) -> Result<()> {
    let db = open_db(db_path)?;
    let stats = db.stats()?;

    println!("📊 Database: {}", db.path());
    println!("   ─────────────────────────────");
    println!("   Users:     {}", stats.users);
    println!("   Earnings:  {}", stats.earnings);
    println!("   Expenses:  {}", stats.expenses);
    println!("   Goals:     {}", stats.goals);
    println!("   Loans:     {}", stats.loans);
    println!("   Forecasts: {}", stats.forecasts);

    Ok(())
}

pub async fn cmd_serve(db_path: &Path, host: &str, port: u16) -> Result<()> {
    let db = open_db(db_path)?;

    println!("🚀 GigCoach listening at http://{}:{}", host, port);
    println!("   Webhook endpoint: POST /webhook");

    gigcoach_server::serve(db, host, port).await
}
