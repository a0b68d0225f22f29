//! Command-line argument parsing for Qualtrics Fetcher
//!
//! This module defines the CLI structure using clap derive macros. Each
//! subcommand maps one-to-one onto an API operation.

use clap::{Args, Parser, Subcommand};

/// Qualtrics Fetcher - list, export, and download survey response data
#[derive(Parser, Debug)]
#[command(
    name = "qualtrics_fetcher",
    version,
    about = "List, export, and download Qualtrics survey response data",
    long_about = "A command-line client for the Qualtrics v3 REST API.
Lists surveys, starts asynchronous response exports, checks export job progress, and downloads the finished result bundle."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available surveys
    List,

    /// Start a response export for the survey specified by ID
    Export(ExportArgs),

    /// Check the status of a response export
    Check(CheckArgs),

    /// Download the data for a completed export
    Download(DownloadArgs),
}

/// Arguments for the export command
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// The ID of the survey to be exported
    #[arg(value_name = "SURVEY_ID")]
    pub survey_id: String,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// The ID of the survey being exported
    #[arg(value_name = "SURVEY_ID")]
    pub survey_id: String,

    /// The export progress ID returned by the export step
    #[arg(value_name = "PROGRESS_ID")]
    pub progress_id: String,
}

/// Arguments for the download command
#[derive(Args, Debug, Clone)]
pub struct DownloadArgs {
    /// The ID of the survey to be downloaded
    #[arg(value_name = "SURVEY_ID")]
    pub survey_id: String,

    /// The export progress ID returned by the export step
    #[arg(value_name = "PROGRESS_ID")]
    pub progress_id: String,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level based on global arguments
    pub fn log_level(&self) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else if self.global.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        }
    }
}
