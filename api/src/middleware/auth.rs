//! Bearer token authentication for protected endpoints
//!
//! [`AuthenticatedUser`] is an extractor: adding it to a handler's arguments
//! makes the route require `Authorization: Bearer <token>`. The token is
//! resolved through the auth service, so a token for a deleted account is
//! rejected as well.

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use cva_core::{TokenError, User};

use crate::handlers::ApiError;
use crate::routes::auth::AppState;

/// User resolved from the request's bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl AuthenticatedUser {
    pub fn into_inner(self) -> User {
        self.0
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = extract_bearer_token(req);
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let token = token.ok_or(TokenError::MissingToken)?;
            let state = state.ok_or(TokenError::InvalidToken)?;

            match state.auth_service.authenticate(&token).await {
                Ok(user) => Ok(AuthenticatedUser(user)),
                Err(e) => {
                    tracing::debug!(error = %e, "Rejected bearer token");
                    Err(e.into())
                }
            }
        })
    }
}

/// Token from an `Authorization: Bearer <token>` header
pub fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
