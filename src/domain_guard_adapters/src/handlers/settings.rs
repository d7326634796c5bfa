//! Admin settings form handlers.

use domain_guard_application::{LoadSettingsUseCase, SaveSettingsUseCase};
use domain_guard_core::{OptionStore, ResponseBuilder, ResponseHelpers, SettingsSubmission};

use crate::{
    admin::{AdminStrings, SettingsPage},
    config::routes,
};

/// Renders the settings form with the stored configuration.
///
/// `updated` shows the "saved" notice after a successful submission.
pub async fn handle_render_settings<S, B>(
    option_store: &S,
    strings: &AdminStrings,
    updated: bool,
    builder: B,
) -> Result<B::Response, String>
where
    S: OptionStore,
    B: ResponseBuilder,
{
    let config = LoadSettingsUseCase::new(option_store)
        .execute()
        .await
        .map_err(|e| format!("Failed to load settings: {}", e))?;

    let html = SettingsPage::new(strings, &config, updated)
        .to_html()
        .map_err(|e| e.to_string())?;

    Ok(builder.html_page(html))
}

/// Stores a submitted form and redirects back to the page.
pub async fn handle_save_settings<S, B>(
    option_store: &S,
    submission: SettingsSubmission,
    builder: B,
) -> Result<B::Response, String>
where
    S: OptionStore,
    B: ResponseBuilder,
{
    SaveSettingsUseCase::new(option_store)
        .execute(submission)
        .await
        .map_err(|e| format!("Failed to save settings: {}", e))?;

    Ok(builder.see_other(routes::ADMIN_SETTINGS_UPDATED))
}
