use actix_web::{web, HttpResponse};
use validator::Validate;

use cva_shared::ApiResponse;

use crate::dto::{RegisterRequest, RegisterResponse};
use crate::handlers::{handle_domain_error, validation_error_response};

use super::AppState;

/// Handler for POST /api/auth/register
///
/// Creates an unverified account and emails it a verification code.
///
/// ## Success (201 Created)
/// ```json
/// {
///     "success": true,
///     "message": "Registration successful. Please verify your email with the OTP sent.",
///     "data": { "id": "...", "email": "maria@example.com", "requires_verification": true, "code_sent": true }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid name, email or password
/// - 409 Conflict: Email already registered
/// - 503 Service Unavailable: Code store unreachable
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .auth_service
        .register(&request.name, &request.email, &request.password)
        .await
    {
        Ok(outcome) => {
            let message = if outcome.code_sent {
                "Registration successful. Please verify your email with the OTP sent."
            } else {
                "Registration successful, but the verification email could not be sent. Please request a new OTP."
            };
            HttpResponse::Created().json(ApiResponse::success_with_message(
                message,
                RegisterResponse::from(outcome),
            ))
        }
        Err(error) => handle_domain_error(error),
    }
}
