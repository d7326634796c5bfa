//! Checks shared by every registration entry point.

use domain_guard_core::{
    Email, EmailError, RegistrationErrorCode, RegistrationErrors, RegistrationFlow, User,
    UserStore, UserStoreError, Username, UsernameError,
};

use super::load_settings::LoadSettingsError;

/// Error types for the registration use cases
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Registration rejected with {} error(s)", .0.len())]
    Rejected(RegistrationErrors),
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Settings error: {0}")]
    SettingsError(#[from] LoadSettingsError),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

pub(crate) struct UsernameMessages {
    pub empty: &'static str,
    pub invalid: &'static str,
    pub too_long: &'static str,
    pub exists: &'static str,
}

pub(crate) struct EmailMessages {
    pub empty: &'static str,
    pub invalid: &'static str,
    pub exists: &'static str,
}

pub(crate) async fn check_username<U>(
    user_store: &U,
    raw: &str,
    messages: &UsernameMessages,
    errors: &mut RegistrationErrors,
) -> Result<Option<Username>, UserStoreError>
where
    U: UserStore,
{
    let username = match Username::parse(raw) {
        Ok(username) => username,
        Err(UsernameError::Empty) => {
            errors.add(RegistrationErrorCode::EmptyUsername, messages.empty);
            return Ok(None);
        }
        Err(UsernameError::TooLong) => {
            errors.add(RegistrationErrorCode::InvalidUsername, messages.too_long);
            return Ok(None);
        }
        Err(UsernameError::IllegalCharacters) => {
            errors.add(RegistrationErrorCode::InvalidUsername, messages.invalid);
            return Ok(None);
        }
    };

    if user_store.username_exists(&username).await? {
        errors.add(RegistrationErrorCode::UsernameExists, messages.exists);
        return Ok(None);
    }

    Ok(Some(username))
}

pub(crate) async fn check_email<U>(
    user_store: &U,
    raw: &str,
    messages: &EmailMessages,
    errors: &mut RegistrationErrors,
) -> Result<Option<Email>, UserStoreError>
where
    U: UserStore,
{
    let email = match Email::parse(raw) {
        Ok(email) => email,
        Err(EmailError::Empty) => {
            errors.add(RegistrationErrorCode::EmptyEmail, messages.empty);
            return Ok(None);
        }
        Err(_) => {
            errors.add(RegistrationErrorCode::InvalidEmail, messages.invalid);
            return Ok(None);
        }
    };

    if user_store.email_exists(&email).await? {
        errors.add(RegistrationErrorCode::EmailExists, messages.exists);
        return Ok(None);
    }

    Ok(Some(email))
}

/// Creates the account once every check has run, or aborts with the
/// accumulated errors.
///
/// A concurrent sign-up can claim the username or email between the checks
/// and the insert. That conflict is reported like the matching check would
/// have reported it.
pub(crate) async fn create_account<U>(
    user_store: &U,
    mut errors: RegistrationErrors,
    username: Option<Username>,
    email: Option<Email>,
    flow: RegistrationFlow,
    username_messages: &UsernameMessages,
    email_messages: &EmailMessages,
) -> Result<User, RegisterError>
where
    U: UserStore,
{
    let (true, Some(username), Some(email)) = (errors.is_empty(), username, email) else {
        return Err(reject(errors, flow));
    };

    let user = User::new(username, email, flow);
    match user_store.add_user(user.clone()).await {
        Ok(()) => {}
        Err(UserStoreError::UserAlreadyExists) => {
            if user_store.email_exists(user.email()).await? {
                errors.add(RegistrationErrorCode::EmailExists, email_messages.exists);
            } else {
                errors.add(RegistrationErrorCode::UsernameExists, username_messages.exists);
            }
            tracing::warn!(%flow, "Account claimed by a concurrent registration");
            return Err(reject(errors, flow));
        }
        Err(e) => return Err(e.into()),
    }

    tracing::info!(%flow, user_id = %user.id(), "User registered");
    Ok(user)
}

fn reject(errors: RegistrationErrors, flow: RegistrationFlow) -> RegisterError {
    tracing::info!(
        %flow,
        errors = errors.len(),
        domain_restricted = errors.has_code(RegistrationErrorCode::DomainRestrictionError),
        "Registration rejected"
    );
    RegisterError::Rejected(errors)
}
