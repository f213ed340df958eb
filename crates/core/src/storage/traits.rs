use async_trait::async_trait;

use super::Result;

/// A named location in local persistent storage holding one string value.
///
/// Implementations must make a completed `write` visible to every later
/// `read` of the same key, including from a fresh instance over the same
/// backing storage.
#[async_trait]
pub trait DurableSlot: Send + Sync {
    /// Reads the value stored under `key`, if any.
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    async fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}
