//! Admin settings page: the rendered form and the list editor script it loads.

pub mod assets;
pub mod page;
pub mod strings;

pub use assets::domain_list_editor_script;
pub use page::{RenderError, SettingsPage};
pub use strings::AdminStrings;
