use serde::Deserialize;

/// User-facing text of the admin settings page.
///
/// Every field can be overridden from configuration (`strings.*`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdminStrings {
    pub page_title: String,
    pub section_title: String,
    pub section_description: String,
    pub allowed_domains_label: String,
    pub domain_label: String,
    pub denied_message_label: String,
    pub remove_button: String,
    pub add_entry_button: String,
    pub placeholder_domain: String,
    pub placeholder_message: String,
    pub submit_button: String,
    pub saved_notice: String,
}

impl Default for AdminStrings {
    fn default() -> Self {
        Self {
            page_title: "Domain Restriction".to_string(),
            section_title: "Domain Settings".to_string(),
            section_description: "Configure allowed domains and custom messages.".to_string(),
            allowed_domains_label: "Allowed Domains".to_string(),
            domain_label: "Domain".to_string(),
            denied_message_label: "Custom Error Message for Allowed Domains".to_string(),
            remove_button: "Remove".to_string(),
            add_entry_button: "Add Entry".to_string(),
            placeholder_domain: "Domain: gmail.com".to_string(),
            placeholder_message: "Custom message".to_string(),
            submit_button: "Save Changes".to_string(),
            saved_notice: "Settings saved.".to_string(),
        }
    }
}

impl AdminStrings {
    /// Strings handed to the list editor script, as a JSON object literal
    /// safe to embed inside a `<script>` element.
    pub fn localized_script_data(&self) -> String {
        serde_json::json!({
            "remove_button_text": self.remove_button,
            "placeholder_domain_text": self.placeholder_domain,
            "placeholder_message_text": self.placeholder_message,
        })
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
    }
}
