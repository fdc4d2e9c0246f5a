//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::lubimyczytac::{Client, ClientError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    client: Client,
}

impl AppState {
    /// Create the state with a client built from `config.source`.
    pub fn new(config: Config) -> Result<Self, ClientError> {
        let client = Client::from_config(&config.source)?;
        Ok(Self::with_client(config, client))
    }

    /// Create the state around an existing client
    pub fn with_client(config: Config, client: Client) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, client }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the lubimyczytac.pl client
    pub fn client(&self) -> &Client {
        &self.inner.client
    }
}
