use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, user::User, username::Username};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Account storage owned by the host application.
///
/// Username and email lookups are case-insensitive.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError>;
    async fn username_exists(&self, username: &Username) -> Result<bool, UserStoreError>;
    async fn email_exists(&self, email: &Email) -> Result<bool, UserStoreError>;
}

// OptionStore port trait and errors
#[derive(Debug, Error)]
pub enum OptionStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Stored option is not valid JSON: {0}")]
    MalformedValue(String),
}

/// Host key/value settings storage. Values are whole JSON documents
/// replaced on every update.
#[async_trait]
pub trait OptionStore: Send + Sync {
    async fn get_option(&self, key: &str) -> Result<Option<serde_json::Value>, OptionStoreError>;
    async fn update_option(
        &self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), OptionStoreError>;
}
