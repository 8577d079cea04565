//! CLI administration tool for linkhop.
//!
//! Inspects and creates mappings directly against PostgreSQL, without going
//! through the HTTP API or the cache.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show a mapping and its click count
//! cargo run --bin admin -- link show abc123
//!
//! # Create a mapping (code generated unless --code is given)
//! cargo run --bin admin -- link create example.com --code promo
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use linkhop::application::services::{DEFAULT_MAX_GENERATION_ATTEMPTS, Registrar};
use linkhop::config::Config;
use linkhop::domain::entities::Mapping;
use linkhop::infrastructure::persistence::PgMappingRepository;
use linkhop::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing linkhop.
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
    /// Inspect or create mappings
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum LinkAction {
    /// Show a mapping by short code
    Show {
        /// Short code
        code: String,
    },

    /// Create a new mapping
    Create {
        /// Long URL; `https://` is prepended when no scheme is given
        url: String,

        /// Requested short code (generated if omitted)
        #[arg(short, long)]
        code: Option<String>,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and count stored mappings
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_link_action(action: LinkAction, pool: PgPool) -> Result<()> {
    let repo = Arc::new(PgMappingRepository::new(Arc::new(pool)));
    let registrar = Registrar::new(
        repo,
        Arc::new(RandomCodeGenerator),
        DEFAULT_MAX_GENERATION_ATTEMPTS,
    );

    match action {
        LinkAction::Show { code } => {
            println!("{}", "🔎 Mapping".bright_blue().bold());
            println!();

            let mapping = registrar
                .get_mapping(&code)
                .await
                .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

            print_mapping(&mapping);
        }
        LinkAction::Create { url, code } => {
            println!("{}", "🔗 Create Mapping".bright_blue().bold());
            println!();

            let mapping = registrar
                .register(code, &url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create mapping: {}", e))?;

            print_mapping(&mapping);
            println!("{}", "✅ Mapping created successfully!".green().bold());
            println!();
        }
    }

    Ok(())
}

fn print_mapping(mapping: &Mapping) {
    println!("  Code:    {}", mapping.short_code.cyan().bold());
    println!("  URL:     {}", mapping.long_url.bright_white());
    println!(
        "  Clicks:  {}",
        mapping.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Created: {}",
        mapping
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());

            let mappings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
                .fetch_one(pool)
                .await
                .context("Failed to count mappings (have migrations been applied?)")?;

            println!(
                "  Mappings: {}",
                mappings.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
