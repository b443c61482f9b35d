use actix_web::{web, HttpResponse};
use validator::Validate;

use cva_shared::ApiResponse;

use crate::dto::ResendOtpRequest;
use crate::handlers::{handle_domain_error, validation_error_response};

use super::AppState;

/// Handler for POST /api/auth/resend-otp
///
/// Replaces the account's code and emails the new one. The previous code
/// stops working immediately.
///
/// ## Errors
/// - 400 Bad Request: `ALREADY_VERIFIED`
/// - 404 Not Found: No account for the email
/// - 429 Too Many Requests: Cooldown active, see `Retry-After`
/// - 502 Bad Gateway: Email provider rejected the message
pub async fn resend_otp(
    state: web::Data<AppState>,
    request: web::Json<ResendOtpRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.auth_service.resend_otp(&request.email).await {
        Ok(_) => HttpResponse::Ok().json(ApiResponse::message("OTP resent successfully")),
        Err(error) => handle_domain_error(error),
    }
}
