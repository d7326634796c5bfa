pub mod capability_validator;
