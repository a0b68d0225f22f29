//! HTTP client configuration and building logic
//!
//! Makes the transport behavior explicit instead of relying on the HTTP
//! library's defaults: request and connect timeouts are configured here, and
//! the instance header set is installed as default headers so every request
//! carries the API token.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Client;

use crate::constants::http;
use crate::errors::{ApiError, ApiResult};

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub request_timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// TCP nodelay (disable Nagle's algorithm)
    pub tcp_nodelay: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: http::DEFAULT_TIMEOUT,
            connect_timeout: http::CONNECT_TIMEOUT,
            tcp_nodelay: true,
        }
    }
}

impl ClientConfig {
    /// Builds the HTTP client with the specified configuration
    ///
    /// `headers` is the per-instance header set (API token and content type)
    /// applied to every request. No retry or redirect customization: each
    /// request is a single attempt.
    pub fn build_http_client(&self, headers: HeaderMap) -> ApiResult<Client> {
        Client::builder()
            .default_headers(headers)
            .timeout(self.request_timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(http::USER_AGENT)
            .tcp_nodelay(self.tcp_nodelay)
            .build()
            .map_err(ApiError::Http)
    }
}
