use std::{collections::HashMap, hash::Hash, path::PathBuf};

use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;

/// JSON file-backed map of entities keyed by id.
///
/// Every mutation rewrites the backing file synchronously before returning,
/// so a completed call survives a restart. A failed write surfaces as
/// `ServiceError::Storage` and is never retried.
pub struct JsonStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
    file_path: PathBuf,
}

impl<K, V> JsonStore<K, V>
where
    K: Eq + Hash + serde::Serialize + serde::de::DeserializeOwned + Clone,
    V: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Open the store from a path. Creates the file with an empty map if missing.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let map: HashMap<K, V> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => {
                let empty: HashMap<K, V> = HashMap::new();
                let bytes = serde_json::to_vec(&empty)
                    .map_err(|e| ServiceError::Storage(e.to_string()))?;
                fs::write(&file_path, bytes)
                    .await
                    .map_err(|e| ServiceError::Storage(e.to_string()))?;
                empty
            }
        };

        Ok(Self { inner: RwLock::new(map), file_path })
    }

    /// Commit the current map to the backing file.
    pub async fn save(&self) -> Result<(), ServiceError> {
        let map = self.inner.read().await;
        let data = serde_json::to_vec(&*map).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Every stored value. Iteration order is the map's, unspecified.
    pub async fn all(&self) -> Vec<V> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    pub async fn count(&self) -> usize {
        let map = self.inner.read().await;
        map.len()
    }

    /// Insert or replace a value and persist.
    pub async fn insert(&self, key: K, value: V) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        map.insert(key, value);
        drop(map);
        self.save().await
    }

    /// Remove a key and persist; returns whether it existed.
    pub async fn remove(&self, key: &K) -> Result<bool, ServiceError> {
        let mut map = self.inner.write().await;
        let existed = map.remove(key).is_some();
        drop(map);
        self.save().await?;
        Ok(existed)
    }

    /// Apply a mutation under the write lock and persist the result.
    /// The mutation's error aborts before anything is written.
    pub async fn mutate<F>(&self, f: F) -> Result<(), ServiceError>
    where
        F: FnOnce(&mut HashMap<K, V>) -> Result<(), ServiceError>,
    {
        let mut map = self.inner.write().await;
        f(&mut map)?;
        drop(map);
        self.save().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("json_store_{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn crud_and_reload_persistence() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        let store = JsonStore::<String, String>::open(&tmp).await?;

        assert_eq!(store.count().await, 0);

        store.insert("a".into(), "1".into()).await?;
        store.insert("b".into(), "2".into()).await?;
        assert_eq!(store.count().await, 2);
        assert_eq!(store.get(&"a".into()).await.unwrap(), "1");

        store
            .mutate(|m| {
                if let Some(v) = m.get_mut(&"a".to_string()) {
                    *v = "10".into();
                }
                Ok(())
            })
            .await?;
        assert_eq!(store.get(&"a".into()).await.unwrap(), "10");

        let existed = store.remove(&"b".into()).await?;
        assert!(existed);
        assert!(!store.remove(&"b".into()).await?);

        // a fresh handle over the same file sees the committed state
        let reloaded = JsonStore::<String, String>::open(&tmp).await?;
        assert_eq!(reloaded.count().await, 1);
        assert_eq!(reloaded.get(&"a".into()).await.unwrap(), "10");

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn failed_mutation_leaves_map_untouched() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        let store = JsonStore::<String, String>::open(&tmp).await?;
        store.insert("a".into(), "1".into()).await?;

        let res = store
            .mutate(|m| {
                m.insert("b".into(), "2".into());
                Err(ServiceError::Validation("boom".into()))
            })
            .await;
        assert!(res.is_err());

        // nothing was persisted for the failed call
        let reloaded = JsonStore::<String, String>::open(&tmp).await?;
        assert_eq!(reloaded.count().await, 1);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
