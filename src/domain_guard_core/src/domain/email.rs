use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MIN_EMAIL_LENGTH: usize = 6;

static LOCAL_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~.-]+$").expect("local part pattern is valid")
});

static DOMAIN_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9-]+$").expect("domain label pattern is valid"));

/// Returns the part of `email` after its last `@`.
///
/// An address without any `@` yields an empty string, so `"a@b@c.com"`
/// gives `"c.com"` and `"nobody"` gives `""`.
pub fn email_domain(email: &str) -> &str {
    email.rfind('@').map_or("", |at| &email[at + 1..])
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email address is empty")]
    Empty,
    #[error("Email address is too short")]
    TooShort,
    #[error("Email address must contain exactly one '@'")]
    InvalidAtSign,
    #[error("Email local part contains invalid characters")]
    InvalidLocalPart,
    #[error("Email domain is invalid")]
    InvalidDomain,
}

/// A syntactically valid email address used for account records.
///
/// The registration gate never relies on this type: it inspects the raw
/// submitted string so that malformed input is denied rather than skipped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(EmailError::Empty);
        }
        if raw.len() < MIN_EMAIL_LENGTH {
            return Err(EmailError::TooShort);
        }

        let (local, domain) = raw.split_once('@').ok_or(EmailError::InvalidAtSign)?;
        if domain.contains('@') {
            return Err(EmailError::InvalidAtSign);
        }
        if local.is_empty() || !LOCAL_PART.is_match(local) {
            return Err(EmailError::InvalidLocalPart);
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 {
            return Err(EmailError::InvalidDomain);
        }
        let labels_valid = labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && DOMAIN_LABEL.is_match(label)
        });
        if !labels_valid {
            return Err(EmailError::InvalidDomain);
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    pub fn domain(&self) -> &str {
        email_domain(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
