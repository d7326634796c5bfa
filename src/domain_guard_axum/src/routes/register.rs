//! Axum-specific registration routes.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use domain_guard_adapters::handlers;
use domain_guard_application::{CommerceRegistration, StandardRegistration};
use domain_guard_core::{OptionStore, UserStore};
use thiserror::Error;

use crate::adapters::response_builder;

/// Standard sign-up form.
#[tracing::instrument(name = "Register user", skip_all)]
pub async fn register_user<U, S>(
    State((user_store, option_store)): State<(U, S)>,
    Json(request): Json<StandardRegistration>,
) -> Result<impl IntoResponse, RegisterRouteError>
where
    U: UserStore + Clone + 'static,
    S: OptionStore + Clone + 'static,
{
    handlers::handle_register_user(&user_store, &option_store, request, response_builder())
        .await
        .map_err(RegisterRouteError::Failed)
}

/// Shop customer sign-up.
#[tracing::instrument(name = "Register customer", skip_all)]
pub async fn register_customer<U, S>(
    State((user_store, option_store)): State<(U, S)>,
    Json(request): Json<CommerceRegistration>,
) -> Result<impl IntoResponse, RegisterRouteError>
where
    U: UserStore + Clone + 'static,
    S: OptionStore + Clone + 'static,
{
    handlers::handle_register_customer(&user_store, &option_store, request, response_builder())
        .await
        .map_err(RegisterRouteError::Failed)
}

#[derive(Debug, Error)]
pub enum RegisterRouteError {
    #[error("{0}")]
    Failed(String),
}

impl IntoResponse for RegisterRouteError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self, "Registration failed");

        let (status, message) = match self {
            RegisterRouteError::Failed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
