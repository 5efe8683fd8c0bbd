//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SNACKWATCH_STAND_URL` - Base URL of the snack stand API (stock + orders)
//!
//! ## Optional
//! - `SNACKWATCH_HOST` - Bind address (default: 127.0.0.1)
//! - `SNACKWATCH_PORT` - Listen port (default: 3000)
//! - `SNACKWATCH_SUBMISSION_STRATEGY` - `aggregate` (default) or `per-unit`
//! - `SNACKWATCH_REQUEST_TIMEOUT_SECS` - Stand API request timeout (default: 10)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use snackwatch_core::SubmissionStrategy;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Snack stand API configuration
    pub stand: StandConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

/// Snack stand API configuration.
#[derive(Debug, Clone)]
pub struct StandConfig {
    /// Base URL of the stand API, e.g. `http://localhost:5000`
    pub base_url: Url,
    /// How the checkout serializes the cart into order requests
    pub strategy: SubmissionStrategy,
    /// Per-request timeout for stand API calls
    pub request_timeout: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SNACKWATCH_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SNACKWATCH_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SNACKWATCH_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SNACKWATCH_PORT".to_string(), e.to_string()))?;

        let stand = StandConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            stand,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl StandConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_required_env("SNACKWATCH_STAND_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SNACKWATCH_STAND_URL".to_string(), e.to_string())
            })?;

        let strategy = get_env_or_default("SNACKWATCH_SUBMISSION_STRATEGY", "aggregate")
            .parse::<SubmissionStrategy>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "SNACKWATCH_SUBMISSION_STRATEGY".to_string(),
                    e.to_string(),
                )
            })?;

        let timeout_secs = get_env_or_default("SNACKWATCH_REQUEST_TIMEOUT_SECS", "10")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "SNACKWATCH_REQUEST_TIMEOUT_SECS".to_string(),
                    e.to_string(),
                )
            })?;

        Ok(Self {
            base_url,
            strategy,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
