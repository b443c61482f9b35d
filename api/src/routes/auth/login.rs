use actix_web::{web, HttpResponse};
use validator::Validate;

use cva_shared::ApiResponse;

use crate::dto::{LoginRequest, SessionResponse};
use crate::handlers::{handle_domain_error, validation_error_response};

use super::AppState;

/// Handler for POST /api/auth/login
///
/// ## Errors
/// - 401 Unauthorized: `INVALID_CREDENTIALS` or `EMAIL_NOT_VERIFIED`
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(ApiResponse::success(SessionResponse::from(response))),
        Err(error) => handle_domain_error(error),
    }
}
