use askama::Template;
use domain_guard_core::DomainRestrictionConfig;
use thiserror::Error;

use super::strings::AdminStrings;
use crate::config::routes;

#[derive(Debug, Error)]
#[error("Failed to render settings page: {0}")]
pub struct RenderError(#[from] askama::Error);

/// The domain restriction settings form.
#[derive(Template)]
#[template(path = "settings_page.html")]
pub struct SettingsPage<'a> {
    strings: &'a AdminStrings,
    allowed_domains: &'a [String],
    denied_message: &'a str,
    updated: bool,
    form_action: &'static str,
    script_src: &'static str,
    script_data: String,
}

impl<'a> SettingsPage<'a> {
    pub fn new(strings: &'a AdminStrings, config: &'a DomainRestrictionConfig, updated: bool) -> Self {
        Self {
            strings,
            allowed_domains: &config.allowed_domains,
            // The stored value, not the fallback shown to registrants
            denied_message: config.denied_message.as_deref().unwrap_or_default(),
            updated,
            form_action: routes::ADMIN_SETTINGS,
            script_src: routes::DOMAIN_LIST_EDITOR_SCRIPT,
            script_data: strings.localized_script_data(),
        }
    }

    #[tracing::instrument(name = "Render settings page", skip_all)]
    pub fn to_html(&self) -> Result<String, RenderError> {
        Ok(self.render()?)
    }
}
