use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use cva_core::{AuthResponse, RegistrationOutcome, User};
use cva_shared::email::{is_valid_email, normalize_email};

/// Checks the address the service will store, so surrounding whitespace and
/// capitals are accepted
fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(&normalize_email(email)) {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "validate_email_address", message = "Please provide a valid email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 6, max = 72, message = "Password must be between 6 and 72 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_email_address", message = "Please provide a valid email"))]
    pub email: String,

    /// 6-digit code from the verification email. Format is checked by the
    /// service so a malformed code gets its own error code.
    #[serde(default)]
    #[validate(length(min = 1, message = "OTP is required"))]
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResendOtpRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_email_address", message = "Please provide a valid email"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_email_address", message = "Please provide a valid email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_email_address", message = "Please provide a valid email"))]
    pub email: Option<String>,
}

/// Public view of an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            is_verified: user.is_verified,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: Uuid,
    pub email: String,
    pub requires_verification: bool,
    pub code_sent: bool,
}

impl From<RegistrationOutcome> for RegisterResponse {
    fn from(outcome: RegistrationOutcome) -> Self {
        Self {
            id: outcome.user_id,
            email: outcome.email,
            requires_verification: outcome.requires_verification,
            code_sent: outcome.code_sent,
        }
    }
}

/// Body of a successful login or email verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: UserResponse,
    pub token: String,
}

impl From<AuthResponse> for SessionResponse {
    fn from(response: AuthResponse) -> Self {
        Self {
            user: response.user.into(),
            token: response.token,
        }
    }
}
