//! Mapping from domain errors to HTTP responses
//!
//! Every failure is returned as `{ success: false, message, code }`. Each
//! verification outcome keeps its own `code` so clients can tell an expired
//! code from a wrong one.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::collections::HashMap;
use std::fmt;
use validator::ValidationErrors;

use cva_core::{AuthError, DomainError, TokenError, ValidationError, VerificationError};
use cva_shared::{error_codes, ErrorResponse};

/// Status, code and message for a domain error
fn describe(error: &DomainError) -> (StatusCode, &'static str, String) {
    let message = error.to_string();
    match error {
        DomainError::Verification(e) => match e {
            VerificationError::InvalidSubject => {
                (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR, message)
            }
            VerificationError::MalformedCode => {
                (StatusCode::BAD_REQUEST, error_codes::OTP_MALFORMED, message)
            }
            VerificationError::NotFound => {
                (StatusCode::BAD_REQUEST, error_codes::OTP_NOT_FOUND, message)
            }
            VerificationError::Expired => (
                StatusCode::BAD_REQUEST,
                error_codes::OTP_EXPIRED,
                "OTP has expired. Please request a new one".to_string(),
            ),
            VerificationError::AlreadyConsumed => {
                (StatusCode::BAD_REQUEST, error_codes::OTP_ALREADY_USED, message)
            }
            VerificationError::Mismatch => (
                StatusCode::BAD_REQUEST,
                error_codes::OTP_MISMATCH,
                "Invalid OTP".to_string(),
            ),
            VerificationError::AlreadyVerified => {
                (StatusCode::BAD_REQUEST, error_codes::ALREADY_VERIFIED, message)
            }
            VerificationError::ResendTooSoon { .. } => {
                (StatusCode::TOO_MANY_REQUESTS, error_codes::RESEND_TOO_SOON, message)
            }
            VerificationError::Storage(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                error_codes::STORAGE_UNAVAILABLE,
                "Service temporarily unavailable. Please try again".to_string(),
            ),
            VerificationError::Delivery(_) => (
                StatusCode::BAD_GATEWAY,
                error_codes::EMAIL_DELIVERY_FAILED,
                "Failed to send OTP email".to_string(),
            ),
        },
        DomainError::Auth(e) => match e {
            AuthError::UserAlreadyExists => {
                (StatusCode::CONFLICT, error_codes::USER_ALREADY_EXISTS, message)
            }
            AuthError::UserNotFound => (StatusCode::NOT_FOUND, error_codes::USER_NOT_FOUND, message),
            AuthError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, error_codes::INVALID_CREDENTIALS, message)
            }
            AuthError::EmailNotVerified => {
                (StatusCode::UNAUTHORIZED, error_codes::EMAIL_NOT_VERIFIED, message)
            }
        },
        DomainError::Token(e) => match e {
            TokenError::MissingToken => (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED, message),
            TokenError::TokenExpired => {
                (StatusCode::UNAUTHORIZED, error_codes::TOKEN_EXPIRED, message)
            }
            TokenError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID, message)
            }
            TokenError::TokenGenerationFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                message,
            ),
        },
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR, message),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND, message),
        DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            "An internal error occurred".to_string(),
        ),
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let (status, code, message) = describe(&error);

    if status.is_server_error() {
        tracing::error!(code, error = %error, "Request failed");
    } else {
        tracing::debug!(code, error = %error, "Request rejected");
    }

    let mut body = ErrorResponse::new(code, message);
    if let DomainError::Validation(ref validation) = error {
        body = body.with_field_errors(HashMap::from([(
            validation.field().to_string(),
            vec![validation.to_string()],
        )]));
    }

    let mut response = HttpResponse::build(status);
    if let DomainError::Verification(VerificationError::ResendTooSoon {
        retry_after_seconds,
    }) = error
    {
        response.insert_header(("Retry-After", retry_after_seconds.to_string()));
    }
    response.json(body)
}

/// 400 response listing every failed request field
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let field_errors: HashMap<String, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    // Lead with one field's message so simple clients have something to show
    let message = field_errors
        .values()
        .flat_map(|messages| messages.first())
        .next()
        .cloned()
        .unwrap_or_else(|| "Invalid request data".to_string());

    HttpResponse::BadRequest()
        .json(ErrorResponse::new(error_codes::VALIDATION_ERROR, message).with_field_errors(field_errors))
}

/// Domain error usable where actix expects `actix_web::Error`
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        Self(error.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self(error.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        describe(&self.0).0
    }

    fn error_response(&self) -> HttpResponse {
        // DomainError is not Clone, so rebuild the body from its parts
        let (status, code, message) = describe(&self.0);
        HttpResponse::build(status).json(ErrorResponse::new(code, message))
    }
}
