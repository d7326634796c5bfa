//! Admin settings page routes. Mounted behind `require_capability`.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::Form;
use domain_guard_adapters::{AdminStrings, handlers};
use domain_guard_core::{OptionStore, SettingsSubmission};
use serde::Deserialize;
use thiserror::Error;

use crate::adapters::response_builder;

/// State shared by the admin settings routes.
#[derive(Clone)]
pub struct AdminState<S> {
    pub option_store: S,
    pub strings: Arc<AdminStrings>,
}

impl<S> AdminState<S> {
    pub fn new(option_store: S, strings: AdminStrings) -> Self {
        Self {
            option_store,
            strings: Arc::new(strings),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SettingsPageQuery {
    #[serde(default)]
    pub updated: Option<String>,
}

/// The settings form as posted by the browser.
///
/// Domain rows arrive as repeated `allowed_domains[]` fields.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsForm {
    #[serde(default, rename = "allowed_domains[]")]
    pub allowed_domains: Vec<String>,
    #[serde(default)]
    pub denied_message: Option<String>,
}

impl From<SettingsForm> for SettingsSubmission {
    fn from(form: SettingsForm) -> Self {
        SettingsSubmission {
            allowed_domains: (!form.allowed_domains.is_empty()).then_some(form.allowed_domains),
            denied_message: form.denied_message,
        }
    }
}

#[tracing::instrument(name = "Render settings", skip_all)]
pub async fn render_settings<S>(
    State(state): State<AdminState<S>>,
    Query(query): Query<SettingsPageQuery>,
) -> Result<impl IntoResponse, SettingsRouteError>
where
    S: OptionStore + Clone + 'static,
{
    let updated = query.updated.as_deref() == Some("true");

    handlers::handle_render_settings(&state.option_store, &state.strings, updated, response_builder())
        .await
        .map_err(SettingsRouteError::Failed)
}

#[tracing::instrument(name = "Save settings", skip_all)]
pub async fn save_settings<S>(
    State(state): State<AdminState<S>>,
    Form(form): Form<SettingsForm>,
) -> Result<impl IntoResponse, SettingsRouteError>
where
    S: OptionStore + Clone + 'static,
{
    handlers::handle_save_settings(&state.option_store, form.into(), response_builder())
        .await
        .map_err(SettingsRouteError::Failed)
}

#[derive(Debug, Error)]
pub enum SettingsRouteError {
    #[error("{0}")]
    Failed(String),
}

impl IntoResponse for SettingsRouteError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self, "Settings request failed");

        let (status, message) = match self {
            SettingsRouteError::Failed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
