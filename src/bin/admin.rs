//! CLI administration tool for tasks-api.
//!
//! Provides database diagnostics, record counts and client removal without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show server version and connection target
//! cargo run --bin admin -- db info
//!
//! # View record counts
//! cargo run --bin admin -- stats
//!
//! # Delete a client (asks for confirmation)
//! cargo run --bin admin -- client delete 42
//! ```
//!
//! # Environment Variables
//!
//! Uses the same database variables as the server (`DATABASE_URL` or the
//! `DB_*` components, `DB_SSL_MODE`, ...).

use tasks_api::config::DatabaseConfig;
use tasks_api::domain::repositories::ClientRepository;
use tasks_api::infrastructure::persistence::{PgClientRepository, create_pool};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tasks-api.
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
    /// Show record counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Manage clients
    Client {
        #[command(subcommand)]
        action: ClientAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[derive(Subcommand)]
enum ClientAction {
    /// Permanently delete a client
    Delete {
        /// Client ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let db_config = DatabaseConfig::from_env()?;
    db_config.validate()?;

    let pool = create_pool(&db_config)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &db_config).await?,
        Commands::Client { action } => handle_client_action(action, &pool).await?,
    }

    pool.close().await;
    Ok(())
}

/// Displays record counts per table and per status.
///
/// # Output Format
///
/// ```text
/// 📊 Statistics
///
///   Users:    12
///     active       9
///     inactive     2
///     deleted      1
///   Tasks:    30
///     pending      20
///     completed    10
///   Clients:  4
/// ```
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let users = count_by_status(pool, "users").await?;
    let tasks = count_by_status(pool, "tasks").await?;
    let clients_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
        .fetch_one(pool)
        .await?;

    print_breakdown("Users:  ", &users);
    print_breakdown("Tasks:  ", &tasks);
    println!(
        "  Clients:  {}",
        clients_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Row counts grouped by the `status` column of `table`.
async fn count_by_status(pool: &PgPool, table: &str) -> Result<Vec<(String, i64)>> {
    let rows = sqlx::query_as::<_, (String, i64)>(&format!(
        "SELECT status::text, COUNT(*) FROM {table} GROUP BY status ORDER BY status"
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

fn print_breakdown(label: &str, rows: &[(String, i64)]) {
    let total: i64 = rows.iter().map(|(_, n)| n).sum();
    println!("  {}  {}", label, total.to_string().bright_green().bold());

    for (status, count) in rows {
        println!("    {:<12} {}", status.cyan(), count.to_string().bright_white());
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &DatabaseConfig) -> Result<()> {
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
            println!("  Target:     {}", config.masked_url().bright_white());
            if config.tls_mode.is_weakened() {
                println!(
                    "  {}",
                    format!("⚠️  TLS mode '{}' does not verify the server", config.tls_mode)
                        .yellow()
                );
            }
            println!();
        }
    }

    Ok(())
}

/// Dispatches client management commands.
async fn handle_client_action(action: ClientAction, pool: &PgPool) -> Result<()> {
    let repo = PgClientRepository::new(Arc::new(pool.clone()));

    match action {
        ClientAction::Delete { id, yes } => delete_client(&repo, id, yes).await,
    }
}

/// Deletes a client after showing it and asking for confirmation.
///
/// Confirmation defaults to No and is skipped with `--yes`.
async fn delete_client(repo: &PgClientRepository, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Client".bright_blue().bold());
    println!();

    let client = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Client not found")?;

    println!("  Client: {}", client.name.cyan());
    println!("  Email:  {}", client.email.cyan());
    println!("  ID:     {}", client.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this client permanently?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = repo
        .delete(client.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete client: {}", e))?;

    if deleted {
        println!("{}", "✅ Client deleted".green().bold());
    } else {
        println!("{}", "⚠️  Client was already gone".yellow());
    }
    println!();

    Ok(())
}
