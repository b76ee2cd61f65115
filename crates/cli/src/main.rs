use std::path::PathBuf;

use anyhow::Result;
use catalog_lookup_core::MatchTier;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod context;

use context::AppContext;

#[derive(Parser)]
#[command(name = "catalog-lookup")]
#[command(about = "Tiered name resolution and search over a technique catalog", long_about = None)]
struct Cli {
    /// Load the catalog from a JSON file into memory instead of using DATABASE_URL
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Refresh the catalog from a JSON array of entries
    Import { file: PathBuf },
    /// Resolve a name to a single entry
    Resolve {
        query: String,
        /// Loosest tier to try: strict, normal or homophone
        #[arg(short, long)]
        tier: Option<MatchTier>,
    },
    /// Substring search merged across tiers
    Search {
        keyword: String,
        #[arg(short, long)]
        limit: Option<usize>,
        #[arg(short, long)]
        tier: Option<MatchTier>,
    },
    /// Resolve, falling back to search when nothing resolves
    Lookup {
        query: String,
        #[arg(short, long)]
        limit: Option<usize>,
        #[arg(short, long)]
        tier: Option<MatchTier>,
    },
    /// Compute missing phonetic keys once
    Backfill,
    /// Delete every entry
    Clear,
    /// Show entry count and backend
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries command output only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::open(cli.catalog.as_deref()).await?;

    match cli.command {
        Commands::Import { file } => commands::catalog::run_import(&ctx, &file).await?,
        Commands::Resolve { query, tier } => commands::lookup::run_resolve(&ctx, &query, tier).await?,
        Commands::Search { keyword, limit, tier } => {
            commands::lookup::run_search(&ctx, &keyword, limit, tier).await?;
        },
        Commands::Lookup { query, limit, tier } => {
            commands::lookup::run_lookup(&ctx, &query, limit, tier).await?;
        },
        Commands::Backfill => commands::catalog::run_backfill(&ctx).await?,
        Commands::Clear => commands::catalog::run_clear(&ctx).await?,
        Commands::Stats => commands::catalog::run_stats(&ctx).await?,
    }

    Ok(())
}
