use actix_web::{web, HttpResponse};
use validator::Validate;

use cva_shared::ApiResponse;

use crate::dto::{SessionResponse, VerifyOtpRequest};
use crate::handlers::{handle_domain_error, validation_error_response};

use super::AppState;

/// Handler for POST /api/auth/verify-otp
///
/// Consumes the emailed code, marks the account verified and starts a session.
///
/// ## Errors
/// - 400 Bad Request: `OTP_MALFORMED`, `OTP_NOT_FOUND`, `OTP_EXPIRED`,
///   `OTP_ALREADY_USED` or `OTP_MISMATCH`
/// - 404 Not Found: No account for the email
pub async fn verify_otp(
    state: web::Data<AppState>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .auth_service
        .verify_otp(&request.email, request.otp.trim())
        .await
    {
        Ok(response) => HttpResponse::Ok().json(ApiResponse::success_with_message(
            "Email verified successfully",
            SessionResponse::from(response),
        )),
        Err(error) => handle_domain_error(error),
    }
}
