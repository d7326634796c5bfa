const DOMAIN_LIST_EDITOR_JS: &str = include_str!("../../assets/domain-list-editor.js");

pub const JAVASCRIPT_CONTENT_TYPE: &str = "text/javascript; charset=utf-8";

/// Source of the list editor widget used by the settings form.
pub fn domain_list_editor_script() -> &'static str {
    DOMAIN_LIST_EDITOR_JS
}
