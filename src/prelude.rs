//! Prelude module for Qualtrics Fetcher Library
//!
//! Re-exports the most commonly used items from the library, providing a
//! convenient way to import everything needed for typical usage with a single
//! `use qualtrics_fetcher::prelude::*;` statement.

// Core result types
pub use crate::errors::{AppError, Result};

// Client and operation types
pub use crate::api::{ClientConfig, DownloadOutcome, ExportProgress, QualtricsClient};
pub use crate::config::QualtricsConfig;

// Commonly used constants
pub use crate::constants::{ENV_API_KEY, ENV_HOST, STATUS_COMPLETE, USER_AGENT};
