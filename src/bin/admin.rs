//! CLI administration tool for visited-domains.
//!
//! Covers operator tasks that the HTTP API deliberately does not expose:
//! schema setup, storage statistics and retention purges.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Create the visited_links table if it is missing
//! cargo run --bin admin -- db init
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Delete everything visited before 2024-01-01T00:00:00Z
//! cargo run --bin admin -- purge --before 1704067200
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use visited_domains::config::mask_connection_string;
use visited_domains::domain::repositories::VisitedLinkRepository;
use visited_domains::infrastructure::persistence::{PgVisitedLinkRepository, ensure_schema};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing visited-domains.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show storage statistics
    Stats,

    /// Delete visited links older than a cutoff
    Purge {
        /// Unix timestamp (seconds); records visited strictly before it are deleted
        #[arg(short, long)]
        before: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Create the visited_links schema if absent
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Purge { before, yes } => handle_purge(&pool, before, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays storage statistics.
///
/// Shows:
/// - Total number of visited link records
/// - Number of distinct links
/// - Oldest and newest visit timestamps
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let repo = PgVisitedLinkRepository::new(Arc::new(pool.clone()));
    let total = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    let distinct: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT link) FROM visited_links")
        .fetch_one(pool)
        .await?;

    let (oldest, newest): (Option<DateTime<Utc>>, Option<DateTime<Utc>>) =
        sqlx::query_as("SELECT MIN(visited_at), MAX(visited_at) FROM visited_links")
            .fetch_one(pool)
            .await?;

    println!(
        "  Visited links:  {}",
        total.to_string().bright_green().bold()
    );
    println!(
        "  Distinct links: {}",
        distinct.to_string().bright_green().bold()
    );
    println!("  Oldest visit:   {}", format_instant(oldest).bright_white());
    println!("  Newest visit:   {}", format_instant(newest).bright_white());
    println!();

    Ok(())
}

/// Deletes records visited before the cutoff, after confirmation.
async fn handle_purge(pool: &PgPool, before: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Purge Visited Links".bright_blue().bold());
    println!();

    let cutoff = DateTime::from_timestamp(before, 0)
        .with_context(|| format!("{} is not a valid Unix timestamp", before))?;

    println!(
        "  Cutoff: {}",
        cutoff.format("%Y-%m-%d %H:%M:%S UTC").to_string().cyan()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete every link visited before this time?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let repo = PgVisitedLinkRepository::new(Arc::new(pool.clone()));
    let removed = repo
        .purge_before(cutoff)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to purge links: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✅ Removed".green().bold(),
        format!("{} record(s)", removed).bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Init => {
            println!("{}", "🛠  Initializing schema...".bright_blue());

            ensure_schema(pool).await?;

            println!("{}", "✅ visited_links table is ready".green().bold());
        }
    }

    Ok(())
}

fn format_instant(instant: Option<DateTime<Utc>>) -> String {
    instant
        .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "-".to_string())
}
