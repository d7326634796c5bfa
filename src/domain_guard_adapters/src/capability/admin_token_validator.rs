use async_trait::async_trait;
use domain_guard_core::{Capability, CapabilityError, CapabilityValidator, HostRequest};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::config::DEFAULT_ADMIN_COOKIE_NAME;

#[derive(Clone, Debug, Deserialize)]
pub struct AdminTokenConfig {
    /// Shared administrator token. When unset every admin request is refused.
    #[serde(default)]
    pub token: Option<Secret<String>>,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

fn default_cookie_name() -> String {
    DEFAULT_ADMIN_COOKIE_NAME.to_string()
}

impl Default for AdminTokenConfig {
    fn default() -> Self {
        Self {
            token: None,
            cookie_name: default_cookie_name(),
        }
    }
}

/// The caller that passed the admin gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminPrincipal {
    pub capability: Capability,
}

/// Grants `ManageOptions` to requests presenting the configured admin token,
/// either as a bearer token or in the admin cookie.
#[derive(Clone)]
pub struct AdminTokenValidator {
    config: AdminTokenConfig,
}

impl AdminTokenValidator {
    pub fn new(config: AdminTokenConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl CapabilityValidator for AdminTokenValidator {
    type Principal = AdminPrincipal;

    fn capability(&self) -> Capability {
        Capability::ManageOptions
    }

    async fn validate<R>(&self, request: &R) -> Result<Self::Principal, CapabilityError>
    where
        R: HostRequest + Sync,
    {
        let presented = match request.bearer_token() {
            Some(token) => token,
            None => {
                let cookie = request
                    .cookie(&self.config.cookie_name)
                    .ok_or(CapabilityError::MissingCredentials)?;
                // Browsers attach the cookie to forged cross-site forms too.
                if !is_safe_method(request.method()) && !is_same_origin(request) {
                    return Err(CapabilityError::CrossSiteRequest);
                }
                cookie
            }
        };

        let Some(expected) = &self.config.token else {
            tracing::warn!("Admin request refused: no admin token configured");
            return Err(CapabilityError::InsufficientCapability);
        };

        if !constant_time_eq(presented.as_bytes(), expected.expose_secret().as_bytes()) {
            return Err(CapabilityError::InsufficientCapability);
        }

        Ok(AdminPrincipal {
            capability: self.capability(),
        })
    }
}

fn is_safe_method(method: &str) -> bool {
    matches!(method, "GET" | "HEAD" | "OPTIONS")
}

/// `Sec-Fetch-Site` when the browser sends it, else `Origin` against `Host`.
/// A request carrying neither is treated as cross-site.
fn is_same_origin<R>(request: &R) -> bool
where
    R: HostRequest + ?Sized,
{
    if let Some(site) = request.header("sec-fetch-site") {
        return matches!(site, "same-origin" | "none");
    }

    match (request.header("origin"), request.header("host")) {
        (Some(origin), Some(host)) => origin
            .split_once("://")
            .is_some_and(|(_, authority)| authority.eq_ignore_ascii_case(host)),
        _ => false,
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
