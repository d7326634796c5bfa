use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_abstraction::HostRequest;

/// Permission required to reach a protected surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Edit site-wide settings, including the domain allow-list.
    ManageOptions,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("Missing administrator credentials")]
    MissingCredentials,
    #[error("Insufficient capability")]
    InsufficientCapability,
    #[error("Cross-site request refused")]
    CrossSiteRequest,
}

/// Trait for gating requests behind an administrator capability.
///
/// Validators extract credentials from the request (headers, cookies),
/// check them and return the principal that will be handed to the
/// protected route.
///
/// # Implementation Note
///
/// Validators receive a `HostRequest` built from the request parts only.
/// Request bodies are not `Sync`, and credentials never live in the body.
#[async_trait]
pub trait CapabilityValidator: Clone + Send + Sync + 'static {
    /// Data describing the authorized caller.
    type Principal: Clone + Send + Sync + 'static;

    /// The capability this validator grants.
    fn capability(&self) -> Capability;

    /// Validate the credentials carried by `request`.
    ///
    /// # Errors
    ///
    /// - `MissingCredentials` when the request carries no credentials at all
    /// - `InsufficientCapability` when the credentials do not grant the capability
    /// - `CrossSiteRequest` when ambient credentials arrive on a state-changing
    ///   request from another site
    async fn validate<R>(&self, request: &R) -> Result<Self::Principal, CapabilityError>
    where
        R: HostRequest + Sync;
}
