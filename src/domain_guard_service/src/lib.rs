pub mod domain_guard_service;
pub mod helpers;
pub mod telemetry;

pub use domain_guard_service::DomainGuardService;
pub use helpers::{StorageSetupError, router_from_settings};
