pub mod admin;
pub mod capability;
pub mod config;
pub mod handlers;
pub mod persistence;

pub use admin::{AdminStrings, RenderError, SettingsPage, domain_list_editor_script};
pub use capability::{AdminPrincipal, AdminTokenConfig, AdminTokenValidator};
pub use persistence::{
    HashMapOptionStore, HashMapUserStore, MIGRATOR, PostgresUserStore, RedisOptionStore,
};
