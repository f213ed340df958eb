//! In-memory slot implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use rentfinder_core::storage::{DurableSlot, Result};

/// In-memory slot backend for testing.
///
/// Clones share the same map, so a fresh `Store` built over a clone sees
/// everything written through the original. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct InMemorySlot {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DurableSlot for InMemorySlot {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().await;
        Ok(values.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.write().await;
        values.remove(key);
        Ok(())
    }
}
