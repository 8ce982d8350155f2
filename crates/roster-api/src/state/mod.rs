//! Application state
//!
//! Holds the shared state for the Axum application: the roster engine and
//! the configuration it was built from.

use std::sync::Arc;

use roster_common::AppConfig;
use roster_service::RosterEngine;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    engine: Arc<dyn RosterEngine>,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(engine: Arc<dyn RosterEngine>, config: AppConfig) -> Self {
        Self {
            engine,
            config: Arc::new(config),
        }
    }

    /// Get the roster engine
    pub fn engine(&self) -> &dyn RosterEngine {
        self.engine.as_ref()
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("engine", &"RosterEngine")
            .field("config", &self.config.app.name)
            .finish()
    }
}
