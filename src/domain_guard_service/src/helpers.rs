use std::sync::Arc;

use axum::Router;
use domain_guard_adapters::{
    AdminTokenValidator, HashMapOptionStore, HashMapUserStore, MIGRATOR, PostgresUserStore,
    RedisOptionStore,
    config::{PostgresSettings, RedisSettings, ServiceSettings, StorageBackend},
};
use redis::{Client, RedisResult};
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::DomainGuardService;

#[derive(Debug, Error)]
pub enum StorageSetupError {
    #[error("Missing `{0}` configuration for the persistent backend")]
    MissingConfiguration(&'static str),
    #[error("Postgres error: {0}")]
    Postgres(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Assemble the service router for the configured storage backend.
pub async fn router_from_settings(settings: &ServiceSettings) -> Result<Router, StorageSetupError> {
    let validator = AdminTokenValidator::new(settings.admin.clone());
    let strings = settings.strings.clone();
    let allowed_origins = Some(settings.allowed_origins.clone());

    let router = match settings.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on restart");
            DomainGuardService::new(
                HashMapUserStore::new(),
                HashMapOptionStore::new(),
                validator,
                strings,
            )
            .as_nested_router(allowed_origins)
        }
        StorageBackend::Persistent => {
            let postgres = settings
                .postgres
                .as_ref()
                .ok_or(StorageSetupError::MissingConfiguration("postgres"))?;
            let redis = settings
                .redis
                .as_ref()
                .ok_or(StorageSetupError::MissingConfiguration("redis"))?;

            let pg_pool = configure_postgresql(postgres).await?;
            let redis_conn = Arc::new(RwLock::new(configure_redis(redis)?));

            DomainGuardService::new(
                PostgresUserStore::new(pg_pool),
                RedisOptionStore::new(redis_conn),
                validator,
                strings,
            )
            .as_nested_router(allowed_origins)
        }
    };

    Ok(router)
}

/// Create a PostgreSQL connection pool and run pending migrations
pub async fn configure_postgresql(
    settings: &PostgresSettings,
) -> Result<PgPool, StorageSetupError> {
    let pg_pool = get_postgres_pool(settings.url.expose_secret()).await?;
    MIGRATOR.run(&pg_pool).await?;
    Ok(pg_pool)
}

/// Open a Redis connection
pub fn configure_redis(settings: &RedisSettings) -> RedisResult<redis::Connection> {
    get_redis_client(&settings.host_name)?.get_connection()
}

pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}

pub fn get_redis_client(redis_hostname: &str) -> RedisResult<Client> {
    let redis_url = format!("redis://{}/", redis_hostname);
    redis::Client::open(redis_url)
}
