use std::collections::HashMap;
use std::sync::Arc;

use domain_guard_core::{
    Email, OptionStore, OptionStoreError, User, UserStore, UserStoreError, Username,
};
use tokio::sync::RwLock;

// Mock option store for testing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Failure {
    Database,
    Undecodable,
}

#[derive(Clone, Default)]
pub(crate) struct MockOptionStore {
    options: Arc<RwLock<HashMap<String, serde_json::Value>>>,
    failure: Option<Failure>,
}

impl MockOptionStore {
    pub(crate) fn with_option(key: &str, value: serde_json::Value) -> Self {
        let store = Self::default();
        store
            .options
            .try_write()
            .expect("fresh lock")
            .insert(key.to_string(), value);
        store
    }

    pub(crate) fn failing() -> Self {
        Self {
            failure: Some(Failure::Database),
            ..Self::default()
        }
    }

    /// Reads fail as if the stored value were not JSON; writes succeed.
    pub(crate) fn undecodable() -> Self {
        Self {
            failure: Some(Failure::Undecodable),
            ..Self::default()
        }
    }

    pub(crate) async fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.options.read().await.get(key).cloned()
    }
}

#[async_trait::async_trait]
impl OptionStore for MockOptionStore {
    async fn get_option(&self, key: &str) -> Result<Option<serde_json::Value>, OptionStoreError> {
        match self.failure {
            Some(Failure::Database) => {
                return Err(OptionStoreError::DatabaseError("connection refused".into()));
            }
            Some(Failure::Undecodable) => {
                return Err(OptionStoreError::MalformedValue(
                    "expected value at line 1 column 1".into(),
                ));
            }
            None => {}
        }
        Ok(self.options.read().await.get(key).cloned())
    }

    async fn update_option(
        &self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), OptionStoreError> {
        if self.failure == Some(Failure::Database) {
            return Err(OptionStoreError::DatabaseError("connection refused".into()));
        }
        self.options.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

// Mock user store for testing
#[derive(Clone, Default)]
pub(crate) struct MockUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl MockUserStore {
    pub(crate) async fn with_user(username: &str, email: &str) -> Self {
        let store = Self::default();
        let user = User::new(
            Username::parse(username).unwrap(),
            Email::parse(email).unwrap(),
            domain_guard_core::RegistrationFlow::Standard,
        );
        store.add_user(user).await.unwrap();
        store
    }

    pub(crate) async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email() == user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.push(user);
        Ok(())
    }

    async fn username_exists(&self, username: &Username) -> Result<bool, UserStoreError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .any(|u| u.username().as_str().eq_ignore_ascii_case(username.as_str())))
    }

    async fn email_exists(&self, email: &Email) -> Result<bool, UserStoreError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .any(|u| u.email().as_str().eq_ignore_ascii_case(email.as_str())))
    }
}

/// Which field a concurrent registration claims between the checks and the insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Claimed {
    Username,
    Email,
}

// User store that loses every insert to a concurrent registration
#[derive(Clone)]
pub(crate) struct RacingUserStore {
    claimed: Claimed,
    inserted: Arc<RwLock<bool>>,
}

impl RacingUserStore {
    pub(crate) fn claiming(claimed: Claimed) -> Self {
        Self {
            claimed,
            inserted: Arc::new(RwLock::new(false)),
        }
    }

    async fn taken(&self, field: Claimed) -> bool {
        *self.inserted.read().await && self.claimed == field
    }
}

#[async_trait::async_trait]
impl UserStore for RacingUserStore {
    async fn add_user(&self, _user: User) -> Result<(), UserStoreError> {
        *self.inserted.write().await = true;
        Err(UserStoreError::UserAlreadyExists)
    }

    async fn username_exists(&self, _username: &Username) -> Result<bool, UserStoreError> {
        Ok(self.taken(Claimed::Username).await)
    }

    async fn email_exists(&self, _email: &Email) -> Result<bool, UserStoreError> {
        Ok(self.taken(Claimed::Email).await)
    }
}
