//! Application state for the employee directory API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::DirectoryResult;
use crate::store::{MemorySession, MemoryStore};

/// Shared application state.
///
/// Holds the committed employee store and the loaded configuration. Each
/// request opens its own [`MemorySession`] from the store.
#[derive(Clone)]
pub struct AppState {
    /// The loaded service configuration.
    config: Arc<ConfigLoader>,
    /// Committed directory state.
    store: Arc<MemoryStore>,
}

impl AppState {
    /// Creates a new application state over an existing store.
    pub fn new(config: ConfigLoader, store: Arc<MemoryStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Creates a new store seeded with the configured employees.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the seed contains duplicate identifiers.
    pub async fn seeded(config: ConfigLoader) -> DirectoryResult<Self> {
        let store = Arc::new(MemoryStore::new());
        store.seed(config.seed_employees().to_vec()).await?;
        Ok(Self::new(config, store))
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the shared store.
    pub fn store(&self) -> &Arc<MemoryStore> {
        &self.store
    }

    /// Opens a unit of work for one request.
    pub fn session(&self) -> MemorySession {
        self.store.session()
    }
}
