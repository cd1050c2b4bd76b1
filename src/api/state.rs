//! Application state for the OEE engine API.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::store::ProductionStore;

/// Shared application state.
///
/// Carries the injected store handle and the engine configuration; there
/// is no process-wide singleton connection, so tests can supply an
/// in-memory store.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ProductionStore>,
    config: Arc<EngineConfig>,
}

impl AppState {
    /// Creates a new application state with the given store and config.
    pub fn new(store: Arc<dyn ProductionStore>, config: EngineConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns the injected production store.
    pub fn store(&self) -> &dyn ProductionStore {
        self.store.as_ref()
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
