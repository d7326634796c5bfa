use axum::{http::header, response::IntoResponse};
use domain_guard_adapters::{admin::assets::JAVASCRIPT_CONTENT_TYPE, domain_list_editor_script};

/// Serves the list editor script loaded by the settings page.
pub async fn domain_list_editor() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, JAVASCRIPT_CONTENT_TYPE),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        domain_list_editor_script(),
    )
}
