//! Application constants for Qualtrics Fetcher
//!
//! This module centralizes the constants used throughout the application,
//! organized by functional domain.

use std::time::Duration;

/// Environment variable names for instance configuration
pub mod env {
    /// Environment variable name for the Qualtrics datacenter hostname
    pub const HOST: &str = "QUALTRICS_HOST";

    /// Environment variable name for the Qualtrics API token
    pub const API_KEY: &str = "QUALTRICS_API_KEY";
}

/// HTTP client configuration constants
pub mod http {
    use super::Duration;

    /// Default user agent for all HTTP requests
    pub const USER_AGENT: &str = "Qualtrics-Fetcher/0.1.0 (Survey Export Tool)";

    /// Default HTTP request timeout
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
}

/// Qualtrics API surface constants
pub mod api {
    /// Versioned base path appended to the instance hostname
    pub const BASE_PATH: &str = "API/v3";

    /// Header carrying the API token on every request
    pub const TOKEN_HEADER: &str = "x-api-token";

    /// Export format requested when starting an export job
    pub const EXPORT_FORMAT: &str = "ndjson";

    /// Status value indicating a finished export job
    pub const STATUS_COMPLETE: &str = "complete";
}

// Re-export commonly used constants for convenience
pub use api::{EXPORT_FORMAT, STATUS_COMPLETE, TOKEN_HEADER};
pub use env::{API_KEY as ENV_API_KEY, HOST as ENV_HOST};
pub use http::{DEFAULT_TIMEOUT as HTTP_TIMEOUT, USER_AGENT};
