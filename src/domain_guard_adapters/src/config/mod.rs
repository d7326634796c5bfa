pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AllowedOrigins, ApplicationSettings, PostgresSettings, RedisSettings, ServiceSettings,
    StorageBackend, StorageSettings,
};
