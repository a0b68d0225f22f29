//! Command-line interface components
//!
//! This module contains CLI-specific code for the Qualtrics Fetcher
//! application: argument parsing and the command handlers.

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, DownloadArgs, ExportArgs, GlobalArgs};
pub use commands::{handle_check, handle_download, handle_export, handle_list};
