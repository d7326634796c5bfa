//! # Domain Guard - Email Domain Registration Gate
//!
//! Facade crate re-exporting the public APIs of the domain guard components.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! domain_guard = { path = "../domain_guard" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `DomainRestrictionConfig`, `RegistrationErrors`, `evaluate`, etc.
//! - **Ports**: `UserStore`, `OptionStore`, `CapabilityValidator`
//! - **Use cases**: `RegisterUserUseCase`, `RegisterCustomerUseCase`, settings load/save
//! - **Adapters**: in-memory, Postgres and Redis stores, admin token gate, settings page
//! - **Service**: `DomainGuardService` - the main entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use domain_guard_core::*;
}

pub use domain_guard_core::{
    DEFAULT_DENIED_MESSAGE, DomainRestrictionConfig, Email, RegistrationError,
    RegistrationErrorCode, RegistrationErrors, RegistrationFlow, SettingsSubmission, User,
    Username, ValidatedSettings, email_domain, evaluate, sanitize_text_field, validate_settings,
};

// ============================================================================
// Ports
// ============================================================================

pub use domain_guard_core::{
    Capability, CapabilityError, CapabilityValidator, OptionStore, OptionStoreError, UserStore,
    UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use domain_guard_application::*;
}

pub use domain_guard_application::{
    CommerceRegistration, LoadSettingsUseCase, RegisterCustomerUseCase, RegisterError,
    RegisterUserUseCase, SETTINGS_OPTION_KEY, SaveSettingsUseCase, StandardRegistration,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic handlers
    pub mod handlers {
        pub use domain_guard_adapters::handlers::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use domain_guard_adapters::persistence::*;
    }

    /// Admin capability validation
    pub mod capability {
        pub use domain_guard_adapters::capability::*;
    }

    /// Admin settings page
    pub mod admin {
        pub use domain_guard_adapters::admin::*;
    }

    /// Configuration
    pub mod config {
        pub use domain_guard_adapters::config::*;
    }
}

pub use domain_guard_adapters::{
    AdminPrincipal, AdminStrings, AdminTokenConfig, AdminTokenValidator, HashMapOptionStore,
    HashMapUserStore, PostgresUserStore, RedisOptionStore,
    config::{AllowedOrigins, ServiceSettings},
};

/// Axum routes and adapters
pub mod axum_integration {
    pub use domain_guard_axum::*;
}

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

pub use domain_guard_service::{
    DomainGuardService, StorageSetupError, domain_guard_service::serve,
    helpers::{configure_postgresql, configure_redis, get_redis_client},
    router_from_settings,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use http;
pub use tokio;
