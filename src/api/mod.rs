//! HTTP client for the Qualtrics v3 REST API
//!
//! This module provides the API client and the export/download operations
//! built on top of it. The module is organized into specialized components:
//! - `config`: HTTP transport configuration and building
//! - `surveys`: survey catalog listing
//! - `export`: export job lifecycle (request, progress probe, download)
//! - `archive`: export bundle extraction
//!
//! Every operation is a single request with no retry: request, response,
//! result. A non-2xx response always surfaces as an error carrying the status
//! code and the raw body.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::QualtricsConfig;
use crate::errors::{ApiError, ApiResult, Result};

// Module declarations
pub mod archive;
pub mod config;
pub mod export;
pub mod surveys;

// Re-export public types
pub use config::ClientConfig;
pub use export::{DownloadOutcome, ExportProgress};

/// Envelope every Qualtrics v3 response body is wrapped in
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    result: T,
}

/// Decode a response body into the `result` half of the API envelope
///
/// A body that is not JSON, or that lacks the expected fields, is a
/// malformed-response error distinct from transport failures.
fn decode_envelope<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    let envelope: ApiEnvelope<T> =
        serde_json::from_str(body).map_err(ApiError::MalformedResponse)?;
    Ok(envelope.result)
}

/// HTTP client for one Qualtrics instance
///
/// Owns the underlying HTTP client (with the instance's API token installed
/// as a default header) and the base endpoint URL. Stateless beyond that:
/// each operation maps to exactly one request.
#[derive(Debug)]
pub struct QualtricsClient {
    client: Client,
    base_url: Url,
}

impl QualtricsClient {
    /// Creates a client for the given instance with default transport settings
    ///
    /// # Errors
    ///
    /// Returns an error if the header set or HTTP client cannot be built.
    pub fn new(config: &QualtricsConfig) -> Result<Self> {
        Self::with_config(config, ClientConfig::default())
    }

    /// Creates a client with custom transport settings
    ///
    /// # Errors
    ///
    /// Returns an error if the header set or HTTP client cannot be built.
    pub fn with_config(config: &QualtricsConfig, client_config: ClientConfig) -> Result<Self> {
        let headers = config.default_headers()?;
        let client = client_config.build_http_client(headers)?;

        tracing::debug!("Created Qualtrics client for {}", config.host());

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
        })
    }

    /// Get the base endpoint URL this client targets
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds an endpoint URL by appending path segments to the base URL
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.as_str().trim_end_matches('/').to_string();
        for segment in segments {
            url.push('/');
            url.push_str(segment);
        }
        Url::parse(&url).map_err(|source| ApiError::InvalidUrl { url, source })
    }

    /// Issues a GET and decodes the `result` envelope half
    async fn get_result<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        let response = self.client.get(url).send().await?;
        Self::parse_envelope(response).await
    }

    /// Issues a POST with a JSON body and decodes the `result` envelope half
    async fn post_result<T, B>(&self, url: Url, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.client.post(url).json(body).send().await?;
        Self::parse_envelope(response).await
    }

    /// Issues a GET and returns the raw response bytes
    async fn get_bytes(&self, url: Url) -> ApiResult<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    async fn parse_envelope<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        decode_envelope(&body)
    }
}
