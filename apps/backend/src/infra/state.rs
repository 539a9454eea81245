use std::sync::Arc;

use crate::config::db::{BackendKind, LocalStoreLocation, StoreConfig};
use crate::error::AppError;
use crate::infra::db::open_guest_store;
use crate::repos::GuestStore;
use crate::services::GuestService;
use crate::state::app_state::AppState;

/// Builder for `AppState` (used in both tests and main).
pub struct StateBuilder {
    store: Option<(Arc<dyn GuestStore>, BackendKind)>,
    config: StoreConfig,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            config: StoreConfig::Local {
                location: LocalStoreLocation::Memory,
            },
        }
    }

    /// Store selected from configuration; opened in `build`.
    pub fn with_backend(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Pre-built store, e.g. one a test has already seeded.
    pub fn with_store(mut self, store: Arc<dyn GuestStore>, kind: BackendKind) -> Self {
        self.store = Some((store, kind));
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let (store, kind) = match self.store {
            Some(prebuilt) => prebuilt,
            None => (open_guest_store(&self.config).await?, self.config.kind()),
        };
        Ok(AppState::new(GuestService::new(store), kind))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
