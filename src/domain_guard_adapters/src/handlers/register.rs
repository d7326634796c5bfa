//! Registration handlers for the standard and shop sign-up forms.

use domain_guard_application::{
    CommerceRegistration, RegisterCustomerUseCase, RegisterError, RegisterUserUseCase,
    StandardRegistration,
};
use domain_guard_core::{OptionStore, ResponseBuilder, ResponseHelpers, User, UserStore};

/// Registers an account through the standard sign-up form.
///
/// # Returns
/// `201` with the new user id, `400` with every registration error, or an
/// error message when storage failed
pub async fn handle_register_user<U, S, B>(
    user_store: &U,
    option_store: &S,
    registration: StandardRegistration,
    builder: B,
) -> Result<B::Response, String>
where
    U: UserStore,
    S: OptionStore,
    B: ResponseBuilder,
{
    let result = RegisterUserUseCase::new(user_store, option_store)
        .execute(registration)
        .await;

    respond(result, builder)
}

/// Registers a customer account through the shop.
pub async fn handle_register_customer<U, S, B>(
    user_store: &U,
    option_store: &S,
    registration: CommerceRegistration,
    builder: B,
) -> Result<B::Response, String>
where
    U: UserStore,
    S: OptionStore,
    B: ResponseBuilder,
{
    let result = RegisterCustomerUseCase::new(user_store, option_store)
        .execute(registration)
        .await;

    respond(result, builder)
}

fn respond<B: ResponseBuilder>(
    result: Result<User, RegisterError>,
    builder: B,
) -> Result<B::Response, String> {
    match result {
        Ok(user) => Ok(builder.created_json(serde_json::json!({
            "status": "success",
            "message": "User created successfully",
            "user_id": user.id(),
            "username": user.username().as_str(),
        }))),
        Err(RegisterError::Rejected(errors)) => Ok(builder.bad_request_json(
            serde_json::to_value(&errors).map_err(|e| e.to_string())?,
        )),
        Err(e) => Err(format!("Registration failed: {}", e)),
    }
}
