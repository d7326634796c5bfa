use serde::{Deserialize, Serialize};

use crate::domain::sanitize::sanitize_text_field;

/// Raw settings as submitted by the admin form. Either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SettingsSubmission {
    #[serde(default)]
    pub allowed_domains: Option<Vec<String>>,
    #[serde(default)]
    pub denied_message: Option<String>,
}

/// Sanitized settings ready to be persisted.
///
/// Fields that were absent from the submission stay absent here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidatedSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denied_message: Option<String>,
}

/// Sanitizes a settings submission. Never fails.
///
/// Domain entries that are empty once sanitized are dropped.
pub fn validate_settings(submission: SettingsSubmission) -> ValidatedSettings {
    let allowed_domains = submission.allowed_domains.map(|domains| {
        domains
            .iter()
            .map(|domain| sanitize_text_field(domain))
            .filter(|domain| !domain.is_empty())
            .collect()
    });

    let denied_message = submission
        .denied_message
        .map(|message| sanitize_text_field(&message));

    ValidatedSettings {
        allowed_domains,
        denied_message,
    }
}
