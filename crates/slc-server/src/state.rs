//! Shared handler state and backend selection.

use std::sync::Arc;

use slc_core::config::{SlcConfig, StorageBackend, StorageConfig};
use slc_core::errors::SlcResult;
use slc_engine::{ClassifierService, SharedClassifier, UserStateOrchestrator};
use slc_storage::StateStoreEngine;

use crate::error::ServerError;
use crate::identity::IdentityConfig;

#[derive(Clone)]
pub struct AppState {
    service: Arc<dyn ClassifierService>,
    identity: Arc<IdentityConfig>,
}

impl AppState {
    pub fn new(service: Arc<dyn ClassifierService>, identity: IdentityConfig) -> Self {
        Self {
            service,
            identity: Arc::new(identity),
        }
    }

    /// Build the service and identity settings described by `config`.
    pub fn from_config(config: &SlcConfig) -> Result<Self, ServerError> {
        let identity = IdentityConfig::from_config(&config.server)?;
        let service = build_service(&config.storage)?;
        Ok(Self::new(service, identity))
    }

    pub fn service(&self) -> Arc<dyn ClassifierService> {
        Arc::clone(&self.service)
    }

    pub fn identity(&self) -> &IdentityConfig {
        &self.identity
    }
}

/// One shared in-process state, or per-user state in SQLite.
pub fn build_service(config: &StorageConfig) -> SlcResult<Arc<dyn ClassifierService>> {
    match config.effective_backend() {
        StorageBackend::Memory => {
            tracing::info!("using shared in-memory classifier state");
            Ok(Arc::new(SharedClassifier::new()))
        }
        StorageBackend::Sqlite => {
            let path = config.effective_path();
            let store = StateStoreEngine::open_with_pool_size(
                &path,
                config.effective_read_pool_size(),
            )?;
            Ok(Arc::new(UserStateOrchestrator::new(Arc::new(store))))
        }
    }
}

