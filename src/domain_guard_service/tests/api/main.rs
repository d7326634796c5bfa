mod admin_settings;
mod assets;
mod helpers;
mod register;
