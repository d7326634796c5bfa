use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use domain_guard_core::{Email, User, UserStore, UserStoreError, Username};

// Keyed by lowercased email
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn key(email: &Email) -> String {
    email.as_str().to_lowercase()
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let username_taken = users.values().any(|existing| {
            existing
                .username()
                .as_str()
                .eq_ignore_ascii_case(user.username().as_str())
        });
        if username_taken || users.contains_key(&key(user.email())) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(key(user.email()), user);
        Ok(())
    }

    async fn username_exists(&self, username: &Username) -> Result<bool, UserStoreError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .any(|user| user.username().as_str().eq_ignore_ascii_case(username.as_str())))
    }

    async fn email_exists(&self, email: &Email) -> Result<bool, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.contains_key(&key(email)))
    }
}
