use anyhow::Result;
use async_trait::async_trait;

/// Durable string key/value storage scoped to the current user profile.
#[async_trait]
pub trait KeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes every stored key.
    async fn clear(&self) -> Result<()>;
}
