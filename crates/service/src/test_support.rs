use std::sync::Arc;

use crate::storage::ObjectStore;

/// Open a throwaway store under a per-run temp directory.
pub async fn temp_store() -> Arc<ObjectStore> {
    let dir = std::env::temp_dir().join(format!("stayhub_test_{}", uuid::Uuid::new_v4()));
    ObjectStore::open(dir).await.expect("store init")
}
