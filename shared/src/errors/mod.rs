//! Shared error response structure and machine-readable error codes

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Body returned by every failing endpoint
///
/// Keeps the `{ success, message }` shape the mobile and web clients already
/// parse, plus a stable `code` they can branch on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Human-readable message shown to the user
    pub message: String,
    /// Error code for client identification
    pub code: String,
    /// Field-level validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            code: code.into(),
            errors: None,
        }
    }

    /// Attach field-level validation failures
    pub fn with_field_errors(mut self, errors: HashMap<String, Vec<String>>) -> Self {
        self.errors = Some(errors);
        self
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    pub const TOKEN_INVALID: &str = "TOKEN_INVALID";
    pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";
    pub const USER_ALREADY_EXISTS: &str = "USER_ALREADY_EXISTS";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const EMAIL_NOT_VERIFIED: &str = "EMAIL_NOT_VERIFIED";
    pub const ALREADY_VERIFIED: &str = "ALREADY_VERIFIED";
    pub const OTP_MALFORMED: &str = "OTP_MALFORMED";
    pub const OTP_NOT_FOUND: &str = "OTP_NOT_FOUND";
    pub const OTP_EXPIRED: &str = "OTP_EXPIRED";
    pub const OTP_ALREADY_USED: &str = "OTP_ALREADY_USED";
    pub const OTP_MISMATCH: &str = "OTP_MISMATCH";
    pub const RESEND_TOO_SOON: &str = "RESEND_TOO_SOON";
    pub const STORAGE_UNAVAILABLE: &str = "STORAGE_UNAVAILABLE";
    pub const EMAIL_DELIVERY_FAILED: &str = "EMAIL_DELIVERY_FAILED";
}
