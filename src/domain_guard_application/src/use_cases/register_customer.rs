use domain_guard_core::{
    Email, MAX_USERNAME_LENGTH, OptionStore, RegistrationErrors, RegistrationFlow, User, UserStore,
    Username, evaluate, sanitize_username,
};
use rand::Rng;
use serde::Deserialize;

use super::{
    load_settings::LoadSettingsUseCase,
    registration::{
        EmailMessages, RegisterError, UsernameMessages, check_email, check_username,
        create_account,
    },
};

const USERNAME_MESSAGES: UsernameMessages = UsernameMessages {
    empty: "Please enter a valid account username.",
    invalid: "Please enter a valid account username.",
    too_long: "Please enter a valid account username.",
    exists: "An account is already registered with that username. Please choose another.",
};

const EMAIL_MESSAGES: EmailMessages = EmailMessages {
    empty: "Please provide a valid email address.",
    invalid: "Please provide a valid email address.",
    exists: "An account is already registered with your email address.",
};

const FALLBACK_USERNAME: &str = "customer";
const SUFFIX_ATTEMPTS: usize = 10;
// "-" followed by four digits
const SUFFIX_LENGTH: usize = 5;

/// Request data for the shop's checkout/account registration form.
#[derive(Debug, Clone, Deserialize)]
pub struct CommerceRegistration {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Register customer use case - account creation from the shop
///
/// Customers may omit a username; one is derived from the email address.
pub struct RegisterCustomerUseCase<'a, U, S>
where
    U: UserStore,
    S: OptionStore,
{
    user_store: &'a U,
    settings: LoadSettingsUseCase<'a, S>,
}

impl<'a, U, S> RegisterCustomerUseCase<'a, U, S>
where
    U: UserStore,
    S: OptionStore,
{
    pub fn new(user_store: &'a U, option_store: &'a S) -> Self {
        Self {
            user_store,
            settings: LoadSettingsUseCase::new(option_store),
        }
    }

    /// Execute the register customer use case
    ///
    /// # Returns
    /// The created user, or `RegisterError::Rejected` carrying every error found
    #[tracing::instrument(name = "RegisterCustomerUseCase::execute", skip_all)]
    pub async fn execute(&self, registration: CommerceRegistration) -> Result<User, RegisterError> {
        let mut errors = RegistrationErrors::new();
        let raw_email = registration.email.trim();

        let email = check_email(
            self.user_store,
            raw_email,
            &EMAIL_MESSAGES,
            &mut errors,
        )
        .await?;

        let requested_username = registration
            .username
            .as_deref()
            .filter(|username| !username.trim().is_empty());

        let username = match (requested_username, &email) {
            (Some(raw), _) => {
                check_username(self.user_store, raw, &USERNAME_MESSAGES, &mut errors).await?
            }
            (None, Some(email)) => Some(self.generate_username(email).await?),
            (None, None) => None,
        };

        let config = self.settings.execute().await?;
        let errors = evaluate(errors, raw_email, &config);

        create_account(
            self.user_store,
            errors,
            username,
            email,
            RegistrationFlow::Commerce,
            &USERNAME_MESSAGES,
            &EMAIL_MESSAGES,
        )
        .await
    }

    /// Derives a free username from the local part of `email`, appending a
    /// random four digit suffix while the name is taken.
    async fn generate_username(&self, email: &Email) -> Result<Username, RegisterError> {
        let base = username_base(email);

        let mut candidate = base.clone();
        for _ in 0..SUFFIX_ATTEMPTS {
            if let Ok(username) = Username::parse(&candidate) {
                if !self.user_store.username_exists(&username).await? {
                    return Ok(username);
                }
            }
            let suffix: u16 = rand::rng().random_range(0..10_000);
            candidate = format!("{base}-{suffix:04}");
        }

        let fallback = format!("{FALLBACK_USERNAME}-{}", uuid::Uuid::new_v4().simple());
        Username::parse(&fallback).map_err(|e| RegisterError::UnexpectedError(e.to_string()))
    }
}

fn username_base(email: &Email) -> String {
    let base: String = sanitize_username(email.local_part())
        .chars()
        .take(MAX_USERNAME_LENGTH - SUFFIX_LENGTH)
        .collect();
    let base = base.trim();

    if base.is_empty() {
        FALLBACK_USERNAME.to_string()
    } else {
        base.to_string()
    }
}
