//! Input checks shared by the account flows

use cva_shared::utils::email::{is_valid_email, normalize_email, MAX_EMAIL_LENGTH};

use crate::errors::ValidationError;

use super::config::AuthServiceConfig;

/// Trims the name and checks its length
pub fn validate_name(name: &str, config: &AuthServiceConfig) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "name".to_string(),
        });
    }
    if name.chars().count() > config.max_name_length {
        return Err(ValidationError::InvalidLength {
            field: "name".to_string(),
            min: 1,
            max: config.max_name_length,
        });
    }
    Ok(name.to_string())
}

/// Normalizes the address and checks its format
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "email".to_string(),
        });
    }
    if email.len() > MAX_EMAIL_LENGTH || !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email)
}

pub fn validate_password(password: &str, config: &AuthServiceConfig) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "password".to_string(),
        });
    }
    let len = password.chars().count();
    if len < config.min_password_length || password.len() > config.max_password_length {
        return Err(ValidationError::InvalidLength {
            field: "password".to_string(),
            min: config.min_password_length,
            max: config.max_password_length,
        });
    }
    Ok(())
}
