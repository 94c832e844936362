#[cfg(test)]
#[path = "local_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::path;

use anyhow::Result;
use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::KeyValueStore;

/// Key/value storage kept as a flat YAML map in a single file.
pub struct LocalStorage {
    pub path: path::PathBuf,
}

impl Default for LocalStorage {
    fn default() -> LocalStorage {
        return LocalStorage::new(path::PathBuf::from(Config::get(ConfigKey::StoreFile)));
    }
}

impl LocalStorage {
    pub fn new(path: path::PathBuf) -> LocalStorage {
        return LocalStorage { path };
    }

    async fn read(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let payload = fs::read_to_string(&self.path).await?;
        if payload.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let items: BTreeMap<String, String> = serde_yaml::from_str(&payload)?;
        return Ok(items);
    }
}

#[async_trait]
impl KeyValueStore for LocalStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.read().await?;
        return Ok(items.get(key).cloned());
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.read().await?;
        items.insert(key.to_string(), value.to_string());
        let payload = serde_yaml::to_string(&items)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = fs::File::create(&self.path).await?;
        file.write_all(payload.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(key, path = ?self.path, "Stored item");
        return Ok(());
    }

    async fn clear(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.path).await?;
        return Ok(());
    }
}
