//! Instance configuration for Qualtrics Fetcher
//!
//! Resolves the Qualtrics datacenter hostname and API token from the
//! environment and produces the base endpoint URL and the header set that
//! every request must carry. Configuration is an explicit struct constructed
//! once at process start and passed to each operation, so there is no hidden
//! process-wide state.

use std::env;
use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use url::Url;

use crate::constants::{api, env as env_constants};
use crate::errors::{ConfigError, ConfigResult};

/// Resolved Qualtrics instance configuration
///
/// Holds the datacenter hostname, the API token, and the precomputed
/// `https://{host}/API/v3` base URL.
#[derive(Clone)]
pub struct QualtricsConfig {
    host: String,
    api_token: String,
    base_url: Url,
}

impl QualtricsConfig {
    /// Creates a configuration from a hostname and API token
    ///
    /// The host must be a bare hostname (e.g. `yourorg.qualtrics.com`),
    /// without scheme or path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host is empty or malformed, the token is
    /// not usable as a header value, or the base URL cannot be parsed.
    pub fn new(host: impl Into<String>, api_token: impl Into<String>) -> ConfigResult<Self> {
        let host = host.into();
        let api_token = api_token.into();

        if host.is_empty() {
            return Err(ConfigError::InvalidHost {
                host,
                reason: "host must not be empty".to_string(),
            });
        }
        if host.contains("://") || host.contains('/') {
            return Err(ConfigError::InvalidHost {
                host,
                reason: "expected a bare hostname without scheme or path".to_string(),
            });
        }
        if HeaderValue::from_str(&api_token).is_err() {
            return Err(ConfigError::InvalidToken);
        }

        let url = format!("https://{}/{}", host, api::BASE_PATH);
        let base_url = Url::parse(&url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: url.clone(),
            source,
        })?;

        Ok(Self {
            host,
            api_token,
            base_url,
        })
    }

    /// Creates a configuration from the environment
    ///
    /// Reads `QUALTRICS_HOST` and `QUALTRICS_API_KEY`. A missing variable is
    /// a startup error naming the variable, rather than a cryptic malformed
    /// URL failure later.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnv` if either variable is absent, or any
    /// error from [`QualtricsConfig::new`].
    pub fn from_env() -> ConfigResult<Self> {
        let host = env::var(env_constants::HOST).map_err(|_| ConfigError::MissingEnv {
            var: env_constants::HOST,
        })?;
        let api_token = env::var(env_constants::API_KEY).map_err(|_| ConfigError::MissingEnv {
            var: env_constants::API_KEY,
        })?;
        Self::new(host, api_token)
    }

    /// Creates a configuration pointing at an explicit base URL (for testing)
    ///
    /// Lets tests aim the client at a local mock server over plain HTTP
    /// instead of the `https://{host}/API/v3` endpoint.
    pub fn with_base_url(base_url: Url, api_token: impl Into<String>) -> ConfigResult<Self> {
        let api_token = api_token.into();
        if HeaderValue::from_str(&api_token).is_err() {
            return Err(ConfigError::InvalidToken);
        }
        let host = base_url.host_str().unwrap_or_default().to_string();
        Ok(Self {
            host,
            api_token,
            base_url,
        })
    }

    /// The datacenter hostname this configuration points at
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The base endpoint URL (`https://{host}/API/v3`)
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the header set required on every request
    ///
    /// Every request carries `X-API-TOKEN` and `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidToken` if the token cannot be encoded as a
    /// header value.
    pub fn default_headers(&self) -> ConfigResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        let token =
            HeaderValue::from_str(&self.api_token).map_err(|_| ConfigError::InvalidToken)?;
        headers.insert(HeaderName::from_static(api::TOKEN_HEADER), token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

// The token is a credential; keep it out of debug output.
impl fmt::Debug for QualtricsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QualtricsConfig")
            .field("host", &self.host)
            .field("api_token", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_construction() {
        let config = QualtricsConfig::new("yourorg.eu.qualtrics.com", "token-123").unwrap();
        assert_eq!(
            config.base_url().as_str(),
            "https://yourorg.eu.qualtrics.com/API/v3"
        );
        assert_eq!(config.host(), "yourorg.eu.qualtrics.com");
    }

    #[test]
    fn test_empty_host_rejected() {
        let result = QualtricsConfig::new("", "token");
        assert!(matches!(result, Err(ConfigError::InvalidHost { .. })));
    }

    #[test]
    fn test_host_with_scheme_rejected() {
        let result = QualtricsConfig::new("https://yourorg.qualtrics.com", "token");
        assert!(matches!(result, Err(ConfigError::InvalidHost { .. })));

        let result = QualtricsConfig::new("yourorg.qualtrics.com/API", "token");
        assert!(matches!(result, Err(ConfigError::InvalidHost { .. })));
    }

    #[test]
    fn test_token_with_control_characters_rejected() {
        let result = QualtricsConfig::new("yourorg.qualtrics.com", "bad\ntoken");
        assert!(matches!(result, Err(ConfigError::InvalidToken)));
    }

    #[test]
    fn test_default_headers() {
        let config = QualtricsConfig::new("yourorg.qualtrics.com", "token-123").unwrap();
        let headers = config.default_headers().unwrap();
        assert_eq!(headers.get("x-api-token").unwrap(), "token-123");
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
    }

    #[test]
    fn test_from_env_missing_variables() {
        // Run the missing-host and missing-key checks in one test to avoid
        // racing other tests on process-wide environment state.
        env::remove_var(env_constants::HOST);
        env::remove_var(env_constants::API_KEY);
        match QualtricsConfig::from_env() {
            Err(ConfigError::MissingEnv { var }) => assert_eq!(var, env_constants::HOST),
            other => panic!("Expected MissingEnv for host, got {:?}", other.map(|_| ())),
        }

        env::set_var(env_constants::HOST, "yourorg.qualtrics.com");
        match QualtricsConfig::from_env() {
            Err(ConfigError::MissingEnv { var }) => assert_eq!(var, env_constants::API_KEY),
            other => panic!("Expected MissingEnv for key, got {:?}", other.map(|_| ())),
        }
        env::remove_var(env_constants::HOST);
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = QualtricsConfig::new("yourorg.qualtrics.com", "secret-token").unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
