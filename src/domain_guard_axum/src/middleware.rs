//! Capability gate for the admin routes.

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use domain_guard_core::{CapabilityError, CapabilityValidator};

use crate::adapters::AxumRequestParts;

/// Rejects requests the validator does not grant its capability to.
///
/// On success the validator's principal is stored in the request extensions.
///
/// ```ignore
/// let admin = Router::new()
///     .route("/admin/settings", get(render_settings::<S>))
///     .route_layer(axum::middleware::from_fn_with_state(
///         validator,
///         require_capability::<V>,
///     ));
/// ```
pub async fn require_capability<V>(
    State(validator): State<V>,
    request: Request,
    next: Next,
) -> Result<Response, CapabilityRejection>
where
    V: CapabilityValidator,
{
    let (parts, body) = request.into_parts();
    let parts = AxumRequestParts(parts);

    let principal = validator.validate(&parts).await.map_err(|e| {
        tracing::info!(path = parts.0.uri.path(), error = %e, "Admin request refused");
        CapabilityRejection(e)
    })?;

    let mut request = Request::from_parts(parts.0, body);
    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct CapabilityRejection(#[from] CapabilityError);

impl IntoResponse for CapabilityRejection {
    fn into_response(self) -> Response {
        let status = match self.0 {
            CapabilityError::MissingCredentials => StatusCode::UNAUTHORIZED,
            CapabilityError::InsufficientCapability | CapabilityError::CrossSiteRequest => {
                StatusCode::FORBIDDEN
            }
        };

        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}
