//! Shared application state injected into Axum handlers.

use std::sync::Arc;

use portal::config::PortalConfig;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config) }
    }

    #[must_use]
    pub fn portal(&self) -> &PortalConfig {
        &self.config.portal
    }
}
