//! CLI administration tool for alias-shortener.
//!
//! Operates directly on the SQLite store, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Store a URL under a generated alias
//! cargo run --bin admin -- url add https://example.com
//!
//! # Store a URL under a chosen alias
//! cargo run --bin admin -- url add https://example.com --alias promo
//!
//! # Look up, list and delete
//! cargo run --bin admin -- url get promo
//! cargo run --bin admin -- url list --limit 20
//! cargo run --bin admin -- url delete promo
//!
//! # Open the store and apply the schema
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_PATH` (required): SQLite database file

use alias_shortener::api::dto::response::validation_message;
use alias_shortener::api::dto::save::SaveRequest;
use alias_shortener::config::load_storage_path;
use alias_shortener::domain::StorageError;
use alias_shortener::domain::repositories::{UrlDeleter, UrlGetter, UrlSaver};
use alias_shortener::infrastructure::persistence::{SqliteUrlRepository, StoreOptions};
use alias_shortener::utils::alias_generator::{DEFAULT_ALIAS_LENGTH, generate_alias};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use validator::Validate;

/// CLI tool for managing alias-shortener.
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
    /// Manage URL mappings
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// URL mapping subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Store a URL
    Add {
        /// Destination URL
        url: String,

        /// Alias to store it under (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Show the destination of an alias
    Get {
        alias: String,
    },

    /// Delete a mapping
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List stored mappings
    List {
        #[arg(short, long, default_value_t = 50)]
        limit: i64,

        #[arg(short, long, default_value_t = 0)]
        offset: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Open the store, apply the schema and report its size
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let storage_path = load_storage_path()?;

    let repo = SqliteUrlRepository::connect(&storage_path, StoreOptions::default())
        .await
        .with_context(|| format!("Failed to open storage at {storage_path}"))?;

    match cli.command {
        Commands::Url { action } => handle_url_action(action, &repo).await?,
        Commands::Db { action } => handle_db_action(action, &repo, &storage_path).await?,
    }

    Ok(())
}

/// Dispatches URL management commands.
async fn handle_url_action(action: UrlAction, repo: &SqliteUrlRepository) -> Result<()> {
    match action {
        UrlAction::Add { url, alias } => add_url(repo, url, alias).await,
        UrlAction::Get { alias } => get_url(repo, &alias).await,
        UrlAction::Delete { alias, yes } => delete_url(repo, &alias, yes).await,
        UrlAction::List { limit, offset } => list_urls(repo, limit, offset).await,
    }
}

/// Stores a URL with the same validation and alias rules as `POST /url`.
///
/// Unlike the HTTP handler, a generated alias that collides is reported rather
/// than retried; rerunning the command picks a new one.
async fn add_url(repo: &SqliteUrlRepository, url: String, alias: Option<String>) -> Result<()> {
    let request = SaveRequest { url, alias };

    if let Err(errors) = request.validate() {
        anyhow::bail!(validation_message(&errors));
    }

    let alias = request
        .requested_alias()
        .map(str::to_string)
        .unwrap_or_else(|| generate_alias(DEFAULT_ALIAS_LENGTH));

    match repo.save_url(&request.url, &alias).await {
        Ok(()) => {
            println!("{}", "✅ URL stored".green().bold());
            println!("  Alias: {}", alias.bright_yellow().bold());
            println!("  URL:   {}", request.url.cyan());
            Ok(())
        }
        Err(StorageError::AliasExists) => {
            anyhow::bail!("alias '{alias}' already exists")
        }
        Err(e) => Err(e).context("Failed to store url"),
    }
}

async fn get_url(repo: &SqliteUrlRepository, alias: &str) -> Result<()> {
    match repo.get_url(alias).await {
        Ok(url) => {
            println!("{} -> {}", alias.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(StorageError::AliasNotFound) => anyhow::bail!("alias '{alias}' not found"),
        Err(e) => Err(e).context("Failed to get url"),
    }
}

/// Deletes a mapping after confirmation (default: No).
async fn delete_url(repo: &SqliteUrlRepository, alias: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete URL".bright_blue().bold());
    println!();

    let url = match repo.get_url(alias).await {
        Ok(url) => url,
        Err(StorageError::AliasNotFound) => anyhow::bail!("alias '{alias}' not found"),
        Err(e) => return Err(e).context("Failed to get url"),
    };

    println!("  Alias: {}", alias.bright_yellow());
    println!("  URL:   {}", url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match repo.delete_url(alias).await {
        Ok(()) => {
            println!("{}", "✅ Deleted".green().bold());
            Ok(())
        }
        Err(StorageError::AliasNotFound) => anyhow::bail!("alias '{alias}' not found"),
        Err(e) => Err(e).context("Failed to delete url"),
    }
}

/// Lists mappings in insertion order.
///
/// # Output Format
///
/// ```text
///   ID    Alias            URL
///   ──────────────────────────────────────────────
///   1     abc123           https://example.com
/// ```
async fn list_urls(repo: &SqliteUrlRepository, limit: i64, offset: i64) -> Result<()> {
    println!("{}", "📋 URL Mappings".bright_blue().bold());
    println!();

    let mappings = repo.list(limit, offset).await.context("Failed to list urls")?;
    let total = repo.count().await.context("Failed to count urls")?;

    if mappings.is_empty() {
        println!("{}", "  No mappings found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<16} {}",
        "ID".bright_white().bold(),
        "Alias".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for mapping in &mappings {
        println!(
            "  {:<5} {:<16} {}",
            mapping.id.to_string().bright_black(),
            mapping.alias.bright_yellow(),
            mapping.url.cyan()
        );
    }

    println!();
    println!(
        "  Showing {} of {}",
        mappings.len().to_string().bright_white().bold(),
        total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(
    action: DbAction,
    repo: &SqliteUrlRepository,
    storage_path: &str,
) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking storage...".bright_blue());

            let total = repo.count().await.context("Failed to query storage")?;

            println!("{}", "✅ Storage OK".green().bold());
            println!("  Path:     {}", storage_path.bright_white());
            println!("  Mappings: {}", total.to_string().bright_green().bold());
        }
    }

    Ok(())
}
