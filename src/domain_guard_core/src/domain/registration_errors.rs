use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable code attached to every registration failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationErrorCode {
    EmptyUsername,
    InvalidUsername,
    UsernameExists,
    EmptyEmail,
    InvalidEmail,
    EmailExists,
    DomainRestrictionError,
}

impl RegistrationErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyUsername => "empty_username",
            Self::InvalidUsername => "invalid_username",
            Self::UsernameExists => "username_exists",
            Self::EmptyEmail => "empty_email",
            Self::InvalidEmail => "invalid_email",
            Self::EmailExists => "email_exists",
            Self::DomainRestrictionError => "domain_restriction_error",
        }
    }
}

impl fmt::Display for RegistrationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationError {
    pub code: RegistrationErrorCode,
    pub message: String,
}

/// Error accumulator shared by every check run during one registration attempt.
///
/// Checks only ever append; an empty accumulator at the end of the chain
/// means the account may be created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationErrors {
    errors: Vec<RegistrationError>,
}

impl RegistrationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, code: RegistrationErrorCode, message: impl Into<String>) {
        self.errors.push(RegistrationError {
            code,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegistrationError> {
        self.errors.iter()
    }

    pub fn has_code(&self, code: RegistrationErrorCode) -> bool {
        self.errors.iter().any(|error| error.code == code)
    }

    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|error| error.message.as_str()).collect()
    }

    pub fn into_vec(self) -> Vec<RegistrationError> {
        self.errors
    }
}

impl IntoIterator for RegistrationErrors {
    type Item = RegistrationError;
    type IntoIter = std::vec::IntoIter<RegistrationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a RegistrationErrors {
    type Item = &'a RegistrationError;
    type IntoIter = std::slice::Iter<'a, RegistrationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
