use config::{Config, ConfigError, Environment, File, FileFormat};
use http::HeaderValue;
use secrecy::Secret;
use serde::Deserialize;

use crate::{
    admin::AdminStrings,
    capability::AdminTokenConfig,
    config::constants::{CONFIG_DIR, DEFAULT_ENVIRONMENT, env, prod},
};

/// Service configuration.
///
/// Sources, later ones overriding earlier ones:
/// 1. `config/base.json`
/// 2. `config/{APP_ENVIRONMENT}.json` (`local` when unset)
/// 3. `DOMAIN_GUARD__*` environment variables, e.g. `DOMAIN_GUARD__ADMIN__TOKEN`
///
/// A `.env` file is loaded into the environment first. Every file is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    pub application: ApplicationSettings,
    pub admin: AdminTokenConfig,
    pub allowed_origins: AllowedOrigins,
    pub storage: StorageSettings,
    pub postgres: Option<PostgresSettings>,
    pub redis: Option<RedisSettings>,
    pub strings: AdminStrings,
}

impl ServiceSettings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = std::env::var(env::APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        let settings = Config::builder()
            .add_source(File::new(&format!("{CONFIG_DIR}/base"), FileFormat::Json).required(false))
            .add_source(
                File::new(&format!("{CONFIG_DIR}/{environment}"), FileFormat::Json)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(env::CONFIG_ENV_PREFIX)
                    .prefix_separator(env::CONFIG_ENV_SEPARATOR)
                    .separator(env::CONFIG_ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        tracing::debug!(%environment, backend = ?settings.storage.backend, "Configuration loaded");

        Ok(settings)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApplicationSettings {
    pub address: String,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            address: prod::APP_ADDRESS.to_string(),
        }
    }
}

/// Origins allowed to make cross-origin requests. Empty disables CORS.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .is_ok_and(|origin| self.0.iter().any(|allowed| allowed == origin))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    /// Postgres for accounts, Redis for options.
    Persistent,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub backend: StorageBackend,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisSettings {
    pub host_name: String,
}
