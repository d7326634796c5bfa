use serde::{Deserialize, Serialize};

use crate::domain::{
    email::email_domain,
    registration_errors::{RegistrationErrorCode, RegistrationErrors},
    settings::ValidatedSettings,
};

/// Message shown when no custom denial message has been configured.
pub const DEFAULT_DENIED_MESSAGE: &str = "Your email domain is not allowed.";

/// The administrator-maintained allow-list and its denial message.
///
/// An empty `allowed_domains` list disables the restriction entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainRestrictionConfig {
    pub allowed_domains: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denied_message: Option<String>,
}

impl DomainRestrictionConfig {
    pub fn new(allowed_domains: Vec<String>, denied_message: Option<String>) -> Self {
        Self {
            allowed_domains,
            denied_message,
        }
    }

    pub fn is_restricted(&self) -> bool {
        !self.allowed_domains.is_empty()
    }

    /// The configured message, or [`DEFAULT_DENIED_MESSAGE`] when unset or empty.
    pub fn denied_message(&self) -> &str {
        self.denied_message
            .as_deref()
            .filter(|message| !message.is_empty())
            .unwrap_or(DEFAULT_DENIED_MESSAGE)
    }

    /// Exact, case-sensitive membership test.
    pub fn allows(&self, domain: &str) -> bool {
        !self.is_restricted() || self.allowed_domains.iter().any(|allowed| allowed == domain)
    }
}

impl From<ValidatedSettings> for DomainRestrictionConfig {
    fn from(settings: ValidatedSettings) -> Self {
        Self {
            allowed_domains: settings.allowed_domains.unwrap_or_default(),
            denied_message: settings.denied_message,
        }
    }
}

/// Registration gate.
///
/// Appends one `domain_restriction_error` to `errors` when `config` restricts
/// registrations and the domain of `email` (everything after the last `@`)
/// is not on the allow-list. Existing errors are kept as they are.
pub fn evaluate(
    mut errors: RegistrationErrors,
    email: &str,
    config: &DomainRestrictionConfig,
) -> RegistrationErrors {
    if !config.allows(email_domain(email)) {
        errors.add(
            RegistrationErrorCode::DomainRestrictionError,
            config.denied_message(),
        );
    }

    errors
}
