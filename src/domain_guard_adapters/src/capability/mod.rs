pub mod admin_token_validator;

pub use admin_token_validator::{AdminPrincipal, AdminTokenConfig, AdminTokenValidator};
