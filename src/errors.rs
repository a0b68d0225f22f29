//! Error types for Qualtrics Fetcher
//!
//! This module defines error types for all components of the application.
//! Errors are designed to be actionable and provide clear context for debugging
//! and user feedback. Nothing is retried: every error is terminal for the
//! invocation that produced it.

use thiserror::Error;

/// Configuration and credential resolution errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set
    #[error(
        "Missing {var} environment variable. Set QUALTRICS_HOST and QUALTRICS_API_KEY for your Qualtrics instance"
    )]
    MissingEnv { var: &'static str },

    /// Host value is empty or carries a scheme/path
    #[error("Invalid API host {host:?}: {reason}")]
    InvalidHost { host: String, reason: String },

    /// API token cannot be sent as an HTTP header value
    #[error("API token is not a valid header value")]
    InvalidToken,

    /// Base endpoint URL could not be constructed from the host
    #[error("Invalid base URL: {url}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Transport and API response errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed at the transport layer
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-2xx response
    #[error("Server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected envelope shape
    #[error("Unexpected response shape from server")]
    MalformedResponse(#[source] serde_json::Error),

    /// Response parsed but a field the operation requires is absent
    #[error("Response is missing expected field: {field}")]
    MissingField { field: &'static str },

    /// Endpoint URL could not be constructed
    #[error("Invalid request URL: {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Export bundle extraction errors
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Archive bytes could not be parsed as a zip file
    #[error("Malformed export archive")]
    Zip(#[from] zip::result::ZipError),

    /// Archive parsed but contains no entries
    #[error("Export archive contains no entries")]
    Empty,

    /// Entry name would escape the destination directory
    #[error("Archive entry has unsafe name: {name}")]
    UnsafeEntryName { name: String },

    /// I/O error while writing the extracted entry
    #[error("File I/O error while extracting archive")]
    Io(#[from] std::io::Error),
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// API transport or response error
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Export bundle extraction error
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get error category for captioned reporting and logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config",
            AppError::Api(_) => "api",
            AppError::Archive(_) => "archive",
            AppError::Io(_) => "io",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// API result type alias
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Archive result type alias
pub type ArchiveResult<T> = std::result::Result<T, ArchiveError>;
