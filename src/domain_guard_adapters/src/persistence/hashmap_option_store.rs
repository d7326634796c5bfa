use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use domain_guard_core::{OptionStore, OptionStoreError};

#[derive(Default, Clone)]
pub struct HashMapOptionStore {
    options: Arc<RwLock<HashMap<String, serde_json::Value>>>,
}

impl HashMapOptionStore {
    pub fn new() -> Self {
        Self {
            options: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl OptionStore for HashMapOptionStore {
    async fn get_option(&self, key: &str) -> Result<Option<serde_json::Value>, OptionStoreError> {
        let options = self.options.read().await;
        Ok(options.get(key).cloned())
    }

    async fn update_option(
        &self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), OptionStoreError> {
        let mut options = self.options.write().await;
        options.insert(key.to_string(), value);
        Ok(())
    }
}
