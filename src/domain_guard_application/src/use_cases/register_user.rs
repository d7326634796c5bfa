use domain_guard_core::{
    OptionStore, RegistrationErrors, RegistrationFlow, User, UserStore, evaluate,
};
use serde::Deserialize;

use super::{
    load_settings::LoadSettingsUseCase,
    registration::{
        EmailMessages, RegisterError, UsernameMessages, check_email, check_username,
        create_account,
    },
};

const USERNAME_MESSAGES: UsernameMessages = UsernameMessages {
    empty: "Please enter a username.",
    invalid: "This username is invalid because it uses illegal characters. Please enter a valid username.",
    too_long: "Username may not be longer than 60 characters.",
    exists: "This username is already registered. Please choose another one.",
};

const EMAIL_MESSAGES: EmailMessages = EmailMessages {
    empty: "Please type your email address.",
    invalid: "The email address is not correct.",
    exists: "This email address is already registered.",
};

/// Request data for the standard registration form.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardRegistration {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Register user use case - the site's standard sign-up form
pub struct RegisterUserUseCase<'a, U, S>
where
    U: UserStore,
    S: OptionStore,
{
    user_store: &'a U,
    settings: LoadSettingsUseCase<'a, S>,
}

impl<'a, U, S> RegisterUserUseCase<'a, U, S>
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

    /// Execute the register user use case
    ///
    /// Runs the username and email checks, then the domain restriction gate
    /// against the settings as they are stored right now.
    ///
    /// # Returns
    /// The created user, or `RegisterError::Rejected` carrying every error found
    #[tracing::instrument(name = "RegisterUserUseCase::execute", skip_all)]
    pub async fn execute(&self, registration: StandardRegistration) -> Result<User, RegisterError> {
        let mut errors = RegistrationErrors::new();
        let raw_email = registration.email.trim();

        let username = check_username(
            self.user_store,
            &registration.username,
            &USERNAME_MESSAGES,
            &mut errors,
        )
        .await?;
        let email = check_email(
            self.user_store,
            raw_email,
            &EMAIL_MESSAGES,
            &mut errors,
        )
        .await?;

        let config = self.settings.execute().await?;
        let errors = evaluate(errors, raw_email, &config);

        create_account(
            self.user_store,
            errors,
            username,
            email,
            RegistrationFlow::Standard,
            &USERNAME_MESSAGES,
            &EMAIL_MESSAGES,
        )
        .await
    }
}
