use actix_web::{web, HttpResponse};
use validator::Validate;

use cva_core::ProfileUpdate;
use cva_shared::ApiResponse;

use crate::dto::{UpdateProfileRequest, UserResponse};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::middleware::AuthenticatedUser;

use super::AppState;

/// Handler for PUT /api/auth/updateprofile
///
/// Omitted fields are left unchanged. Changing the email keeps the
/// account's verification status.
///
/// ## Errors
/// - 400 Bad Request: Invalid name or email
/// - 401 Unauthorized: Missing or invalid token
/// - 409 Conflict: Email belongs to another account
pub async fn update_profile(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    request: web::Json<UpdateProfileRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let request = request.into_inner();
    let update = ProfileUpdate {
        name: request.name,
        email: request.email,
    };

    match state.auth_service.update_profile(user.0.id, update).await {
        Ok(user) => HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(user))),
        Err(error) => handle_domain_error(error),
    }
}
