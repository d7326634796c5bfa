use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{email::Email, username::Username};

/// Entry point through which an account was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationFlow {
    Standard,
    Commerce,
}

impl RegistrationFlow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Commerce => "commerce",
        }
    }
}

impl fmt::Display for RegistrationFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: Uuid,
    username: Username,
    email: Email,
    registered_at: DateTime<Utc>,
    flow: RegistrationFlow,
}

impl User {
    pub fn new(username: Username, email: Email, flow: RegistrationFlow) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            registered_at: Utc::now(),
            flow,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub fn flow(&self) -> RegistrationFlow {
        self.flow
    }
}
