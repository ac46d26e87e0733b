//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::services::AuthService;
use crate::store::{ContentStore, FileBackend, MemoryBackend, StoreBackend, StoreError};

/// Application state shared across all handlers.
///
/// The store and auth service are constructed once here and handed to
/// consumers by reference; nothing reaches for module-level globals.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    store: ContentStore,
    auth: AuthService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Ephemeral mode keeps content in memory; otherwise collections persist
    /// under the configured data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new(config: AdminConfig) -> Result<Self, StoreError> {
        let backend: Arc<dyn StoreBackend> = if config.ephemeral {
            tracing::info!("Running with in-memory store, content is not persisted");
            Arc::new(MemoryBackend::new())
        } else {
            Arc::new(FileBackend::new(&config.data_dir)?)
        };

        let store = ContentStore::new(backend);
        let auth = AuthService::new(store.clone());

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                auth,
            }),
        })
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the content store.
    #[must_use]
    pub fn store(&self) -> &ContentStore {
        &self.inner.store
    }

    /// Get a reference to the auth service.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }
}
