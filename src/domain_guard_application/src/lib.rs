pub mod use_cases;

pub use use_cases::{
    load_settings::{LoadSettingsError, LoadSettingsUseCase, SETTINGS_OPTION_KEY},
    register_customer::{CommerceRegistration, RegisterCustomerUseCase},
    register_user::{RegisterUserUseCase, StandardRegistration},
    registration::RegisterError,
    save_settings::{SaveSettingsError, SaveSettingsUseCase},
};
