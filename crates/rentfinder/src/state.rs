//! Wiring of the slot, store, auth provider and services.

use std::sync::Arc;

use rentfinder_core::storage::DurableSlot;

use crate::auth::MockAuth;
use crate::config::Config;
use crate::services::{
    ApplicationService, MaintenanceService, MessageService, PropertyService,
};
use crate::slot::InMemorySlot;
use crate::store::Store;

/// Everything a command needs, built once per process.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
    pub auth: MockAuth,
    pub properties: PropertyService,
    pub applications: ApplicationService,
    pub maintenance: MaintenanceService,
    pub messages: MessageService,
}

impl AppState {
    /// Builds the state over `slot`, using the keys from `config`.
    pub fn with_slot(slot: Arc<dyn DurableSlot>, config: &Config) -> Self {
        let store = Store::new(slot.clone()).with_key(&config.db_key);
        let auth = MockAuth::new(slot).with_key(&config.auth_key);

        Self {
            properties: PropertyService::new(store.clone(), auth.clone()),
            applications: ApplicationService::new(store.clone()),
            maintenance: MaintenanceService::new(store.clone()),
            messages: MessageService::new(store.clone()),
            store,
            auth,
        }
    }

    /// State over a fresh in-memory slot.
    pub fn in_memory(config: &Config) -> Self {
        Self::with_slot(Arc::new(InMemorySlot::new()), config)
    }

    /// State over the SQLite file at `config.db_path`, or in memory when
    /// `config.in_memory` is set.
    #[cfg(feature = "sqlite")]
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        if config.in_memory {
            return Ok(Self::in_memory(config));
        }
        let slot = crate::slot::SqliteSlot::open(&config.db_path).await?;
        tracing::debug!(path = %config.db_path, "Opened SQLite slot");
        Ok(Self::with_slot(Arc::new(slot), config))
    }

    /// Without the `sqlite` feature only the in-memory slot exists.
    #[cfg(not(feature = "sqlite"))]
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        if !config.in_memory {
            tracing::warn!("Built without the sqlite feature, data will not persist");
        }
        Ok(Self::in_memory(config))
    }
}
