//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod lookup;
pub mod serve;
pub mod suggest;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Address search client for api-adresse.data.gouv.fr
#[derive(Parser)]
#[command(name = "adresse-search")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Suggest addresses for partial input
    Suggest(suggest::SuggestArgs),

    /// Search an address and print map-ready results
    Search(lookup::SearchArgs),

    /// Find the addresses nearest to a location
    Reverse(lookup::ReverseArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Suggest(args) => suggest::run(args).await,
        Commands::Search(args) => lookup::run_search(args).await,
        Commands::Reverse(args) => lookup::run_reverse(args).await,
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}

/// Initialize logging to stderr, honoring RUST_LOG
pub fn init_logging(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
