pub mod email;
pub mod registration_errors;
pub mod restriction;
pub mod sanitize;
pub mod settings;
pub mod user;
pub mod username;
