use actix_web::HttpResponse;

use cva_shared::ApiResponse;

use crate::dto::UserResponse;
use crate::middleware::AuthenticatedUser;

/// Handler for GET /api/auth/me
pub async fn me(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(user.into_inner())))
}
