use std::sync::Arc;

use domain_guard_core::{OptionStore, OptionStoreError};
use redis::{Commands, Connection};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct RedisOptionStore {
    conn: Arc<RwLock<Connection>>,
}

impl RedisOptionStore {
    pub fn new(conn: Arc<RwLock<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl OptionStore for RedisOptionStore {
    #[tracing::instrument(name = "Reading option from Redis", skip(self))]
    async fn get_option(&self, key: &str) -> Result<Option<serde_json::Value>, OptionStoreError> {
        let key = get_key(key);

        let raw: Option<String> = {
            let mut conn = self.conn.write().await;
            conn.get(&key)
                .map_err(|e| OptionStoreError::DatabaseError(e.to_string()))?
        };

        raw.map(|raw| {
            serde_json::from_str(&raw).map_err(|e| OptionStoreError::MalformedValue(e.to_string()))
        })
        .transpose()
    }

    #[tracing::instrument(name = "Writing option to Redis", skip(self, value))]
    async fn update_option(
        &self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), OptionStoreError> {
        let key = get_key(key);
        let raw = value.to_string();

        let mut conn = self.conn.write().await;
        conn.set(key, raw)
            .map_err(|e| OptionStoreError::DatabaseError(e.to_string()))
    }
}

const OPTION_KEY_PREFIX: &str = "option:";

fn get_key(key: &str) -> String {
    format!("{}{}", OPTION_KEY_PREFIX, key)
}
