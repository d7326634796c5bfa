//! Framework-agnostic handlers.
//!
//! Framework-specific routes extract data from requests, call these handlers
//! and convert the results back to framework responses.

pub mod register;
pub mod settings;

pub use register::{handle_register_customer, handle_register_user};
pub use settings::{handle_render_settings, handle_save_settings};
