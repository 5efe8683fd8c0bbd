//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::stand::{StandClient, StandError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the stand API client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    stand: StandClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the stand API client cannot be built from the
    /// configuration.
    pub fn new(config: StorefrontConfig) -> Result<Self, StandError> {
        let stand = StandClient::new(&config.stand)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, stand }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the stand API client.
    #[must_use]
    pub fn stand(&self) -> &StandClient {
        &self.inner.stand
    }
}
