use domain_guard_core::{
    DomainRestrictionConfig, OptionStore, OptionStoreError, SettingsSubmission, validate_settings,
};

use super::load_settings::SETTINGS_OPTION_KEY;

/// Error types for save settings use case
#[derive(Debug, thiserror::Error)]
pub enum SaveSettingsError {
    #[error("Option store error: {0}")]
    OptionStoreError(#[from] OptionStoreError),
    #[error("Failed to serialize settings: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Save settings use case - sanitizes an admin submission and replaces the stored record
pub struct SaveSettingsUseCase<'a, S>
where
    S: OptionStore,
{
    option_store: &'a S,
}

impl<'a, S> SaveSettingsUseCase<'a, S>
where
    S: OptionStore,
{
    pub fn new(option_store: &'a S) -> Self {
        Self { option_store }
    }

    /// Execute the save settings use case
    ///
    /// The whole record is replaced: a field missing from `submission` is
    /// reset to its default.
    ///
    /// # Returns
    /// The configuration that registrations will see from now on
    #[tracing::instrument(name = "SaveSettingsUseCase::execute", skip(self, submission))]
    pub async fn execute(
        &self,
        submission: SettingsSubmission,
    ) -> Result<DomainRestrictionConfig, SaveSettingsError> {
        let validated = validate_settings(submission);
        let value = serde_json::to_value(&validated)?;

        self.option_store
            .update_option(SETTINGS_OPTION_KEY, value)
            .await?;

        let config = DomainRestrictionConfig::from(validated);
        tracing::info!(
            allowed_domains = config.allowed_domains.len(),
            "Domain restriction settings saved"
        );

        Ok(config)
    }
}
