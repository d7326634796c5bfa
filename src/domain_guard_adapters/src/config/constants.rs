pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const CONFIG_ENV_PREFIX: &str = "DOMAIN_GUARD";
    pub const CONFIG_ENV_SEPARATOR: &str = "__";
}

pub mod routes {
    pub const REGISTER: &str = "/register";
    pub const SHOP_REGISTER: &str = "/shop/register";
    pub const ADMIN_SETTINGS: &str = "/admin/settings";
    pub const ADMIN_SETTINGS_UPDATED: &str = "/admin/settings?updated=true";
    pub const DOMAIN_LIST_EDITOR_SCRIPT: &str = "/admin/assets/domain-list-editor.js";
    pub const HEALTH: &str = "/health";
}

pub const CONFIG_DIR: &str = "config";
pub const DEFAULT_ENVIRONMENT: &str = "local";
pub const DEFAULT_ADMIN_COOKIE_NAME: &str = "domain_guard_admin";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
