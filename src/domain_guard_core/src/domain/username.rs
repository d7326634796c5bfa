use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::sanitize::{collapse_whitespace, remove_percent_octets, strip_tags};

pub const MAX_USERNAME_LENGTH: usize = 60;

static HTML_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&.+?;").expect("entity pattern is valid"));

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9 _.\-@]").expect("username pattern is valid"));

/// Strips a login name down to letters, digits, space, `_`, `.`, `-` and `@`.
pub fn sanitize_username(raw: &str) -> String {
    let text = remove_percent_octets(&strip_tags(raw));
    let text = HTML_ENTITY.replace_all(&text, "");
    let text = DISALLOWED.replace_all(&text, "");

    collapse_whitespace(text.trim()).trim().to_string()
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username is empty")]
    Empty,
    #[error("Username contains illegal characters")]
    IllegalCharacters,
    #[error("Username may not be longer than {} characters", MAX_USERNAME_LENGTH)]
    TooLong,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Accepts `raw` only if sanitizing would leave it unchanged.
    pub fn parse(raw: &str) -> Result<Self, UsernameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UsernameError::Empty);
        }

        let sanitized = sanitize_username(trimmed);
        if sanitized.is_empty() || sanitized != trimmed {
            return Err(UsernameError::IllegalCharacters);
        }
        if sanitized.chars().count() > MAX_USERNAME_LENGTH {
            return Err(UsernameError::TooLong);
        }

        Ok(Self(sanitized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
