//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod lookup;
pub mod serve;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Google Maps geocoding and place lookup proxy
#[derive(Parser)]
#[command(name = "gmaps-location")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Reverse geocode a coordinate pair
    Location(lookup::LocationArgs),

    /// Find a place from a text query
    FindPlace(lookup::FindPlaceArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::Location(args) => lookup::run_location(args).await,
        Commands::FindPlace(args) => lookup::run_find_place(args).await,
        Commands::Config(args) => config::run(args),
    }
}

/// Initialize logging to stderr, honouring `RUST_LOG` when set
fn init_logging(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}
