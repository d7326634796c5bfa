pub mod domain;
pub mod http_abstraction;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    email::{Email, EmailError, email_domain},
    registration_errors::{RegistrationError, RegistrationErrorCode, RegistrationErrors},
    restriction::{DEFAULT_DENIED_MESSAGE, DomainRestrictionConfig, evaluate},
    sanitize::sanitize_text_field,
    settings::{SettingsSubmission, ValidatedSettings, validate_settings},
    user::{RegistrationFlow, User},
    username::{MAX_USERNAME_LENGTH, Username, UsernameError, sanitize_username},
};

pub use ports::repositories::{OptionStore, OptionStoreError, UserStore, UserStoreError};

pub use strategies::capability_validator::{Capability, CapabilityError, CapabilityValidator};

pub use http_abstraction::{HostRequest, ResponseBuilder, ResponseHelpers};
