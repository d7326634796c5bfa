//! Axum-specific route handlers.
//!
//! These routes use Axum's extractors to get data from requests, call the
//! framework-agnostic handlers and convert the results to Axum responses.

pub mod assets;
pub mod health;
pub mod register;
pub mod settings;

pub use assets::domain_list_editor;
pub use health::health_check;
pub use register::{register_customer, register_user};
pub use settings::{AdminState, render_settings, save_settings};
