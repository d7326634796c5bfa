use domain_guard_core::{DomainRestrictionConfig, OptionStore, OptionStoreError};

/// Option key under which the domain restriction record is stored.
pub const SETTINGS_OPTION_KEY: &str = "domain_guard_settings";

/// Error types for load settings use case
#[derive(Debug, thiserror::Error)]
pub enum LoadSettingsError {
    #[error("Option store error: {0}")]
    OptionStoreError(#[from] OptionStoreError),
}

/// Load settings use case - reads the current domain restriction record
pub struct LoadSettingsUseCase<'a, S>
where
    S: OptionStore,
{
    option_store: &'a S,
}

impl<'a, S> LoadSettingsUseCase<'a, S>
where
    S: OptionStore,
{
    pub fn new(option_store: &'a S) -> Self {
        Self { option_store }
    }

    /// Execute the load settings use case
    ///
    /// # Returns
    /// The stored record, or the empty default when nothing has been saved yet.
    /// A record that cannot be decoded, or no longer matches the expected
    /// shape, is treated as unset.
    #[tracing::instrument(name = "LoadSettingsUseCase::execute", skip(self))]
    pub async fn execute(&self) -> Result<DomainRestrictionConfig, LoadSettingsError> {
        let value = match self.option_store.get_option(SETTINGS_OPTION_KEY).await {
            Ok(Some(value)) => value,
            Ok(None) => return Ok(DomainRestrictionConfig::default()),
            Err(OptionStoreError::MalformedValue(e)) => {
                tracing::warn!(error = %e, "Stored domain restriction settings are not valid JSON, using defaults");
                return Ok(DomainRestrictionConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_value(value) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(error = %e, "Stored domain restriction settings are malformed, using defaults");
                Ok(DomainRestrictionConfig::default())
            }
        }
    }
}
