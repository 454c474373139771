//! CLI administration tool for client-registry.
//!
//! Provides commands for inspecting and maintaining the client directory
//! without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # List all clients
//! cargo run --bin admin -- client list
//!
//! # Delete a client (with confirmation)
//! cargo run --bin admin -- client delete 42
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use client_registry::domain::repositories::ClientRepository;
use client_registry::infrastructure::persistence::PgClientRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing client-registry.
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
    /// Manage client records
    Client {
        #[command(subcommand)]
        action: ClientAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Client record subcommands.
#[derive(Subcommand)]
enum ClientAction {
    /// List all clients
    List,

    /// Permanently delete a client by id
    Delete {
        /// Client id to delete
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Client { action } => handle_client_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches client record commands.
async fn handle_client_action(action: ClientAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgClientRepository::new(Arc::new(pool.clone())));

    match action {
        ClientAction::List => {
            list_clients(repo).await?;
        }
        ClientAction::Delete { id, yes } => {
            delete_client(repo, id, yes).await?;
        }
    }

    Ok(())
}

/// Prints all clients in a terminal-friendly table.
async fn list_clients(repo: Arc<PgClientRepository>) -> Result<()> {
    println!("{}", "Clients".bright_blue().bold());
    println!();

    let clients = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list clients: {}", e))?;

    if clients.is_empty() {
        println!("{}", "No clients found".yellow());
        return Ok(());
    }

    for client in &clients {
        println!(
            "  {:>6}  {}  {}  {}",
            client.id.to_string().cyan(),
            client.name.bright_white(),
            client.email.as_deref().unwrap_or("-").dimmed(),
            client.phone.as_deref().unwrap_or("-").dimmed(),
        );
    }

    println!();
    println!("{} client(s)", clients.len().to_string().green());

    Ok(())
}

/// Deletes a client after interactive confirmation.
///
/// # Flow
///
/// 1. Resolve the record (abort if missing)
/// 2. Display record details
/// 3. Confirm deletion (unless `--yes` flag)
/// 4. Remove the row permanently
async fn delete_client(repo: Arc<PgClientRepository>, id: i64, skip_confirm: bool) -> Result<()> {
    let client = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to look up client: {}", e))?;

    let Some(client) = client else {
        println!("{}", format!("No client with id {}", id).red());
        return Ok(());
    };

    println!("{}", "Delete client".bright_blue().bold());
    println!();
    println!("  Id:    {}", client.id.to_string().cyan());
    println!("  Name:  {}", client.name.bright_white());
    println!(
        "  Email: {}",
        client.email.as_deref().unwrap_or("-").dimmed()
    );
    println!();
    println!(
        "{}",
        "This removes the record permanently.".red().bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this client?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }
    }

    let removed = repo
        .delete(client.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete client: {}", e))?;

    if removed {
        println!("{}", "Client deleted".green().bold());
    } else {
        println!("{}", "Client was already gone".yellow());
    }

    Ok(())
}

/// Shows directory statistics.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    let repo = PgClientRepository::new(Arc::new(pool.clone()));

    let total = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count clients: {}", e))?;

    println!("{}", "Statistics".bright_blue().bold());
    println!();
    println!("  Clients: {}", total.to_string().green().bold());

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query_scalar::<_, i32>("SELECT 1")
                .fetch_one(pool)
                .await
                .context("Database check failed")?;

            println!("{}", "Database connection OK".green().bold());
        }
    }

    Ok(())
}
