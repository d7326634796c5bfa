pub mod load_settings;
pub mod register_customer;
pub mod register_user;
pub mod registration;
pub mod save_settings;

#[cfg(test)]
pub(crate) mod test_support;
