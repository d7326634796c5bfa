//! Axum integration for the domain restriction gate.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  domain_guard_core: HTTP traits          │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  domain_guard_axum                       │
//! │  - AxumRequestParts newtype wrapper      │
//! │  - AxumResponseBuilder                   │
//! │  - require_capability middleware         │
//! │  - Axum route handlers                   │
//! └──────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod middleware;
pub mod routes;

pub use adapters::{AxumRequestParts, AxumResponseBuilder, response_builder};
pub use middleware::require_capability;
