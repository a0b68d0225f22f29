//! Qualtrics Fetcher CLI application
//!
//! Command-line interface for listing, exporting, and downloading Qualtrics
//! survey response data.

use std::process;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use qualtrics_fetcher::cli::{
    handle_check, handle_download, handle_export, handle_list, Cli, Commands,
};
use qualtrics_fetcher::errors::Result;

#[tokio::main]
async fn main() {
    let result = run().await;

    // Surface every failure as one captioned line rather than a panic trace
    if let Err(e) = result {
        eprintln!("Error ({}): {}", e.category(), e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok(); // Ignore errors if file doesn't exist

    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize logging based on verbosity
    init_logging(&cli);

    info!("Qualtrics Fetcher v{} starting", env!("CARGO_PKG_VERSION"));

    // Execute the appropriate command
    match cli.command {
        Commands::List => handle_list().await,
        Commands::Export(args) => handle_export(args).await,
        Commands::Check(args) => handle_check(args).await,
        Commands::Download(args) => handle_download(args).await,
    }
}

/// Initialize logging based on CLI verbosity settings
fn init_logging(cli: &Cli) {
    let log_level = cli.log_level();

    // Create environment filter
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("qualtrics_fetcher={}", log_level).parse().unwrap());

    // Initialize subscriber
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose) // Show levels only in very verbose mode
        .init();
}
