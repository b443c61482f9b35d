//! Application state and factory
//!
//! Builds the actix-web application from an already wired [`AppState`] so
//! the binary and the integration tests serve the same routes.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::InternalError,
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use cva_shared::{error_codes, types::HealthResponse, Environment, ErrorResponse};

use crate::middleware::create_cors;
use crate::routes::auth::{
    login::login, me::me, register::register, resend_otp::resend_otp,
    update_profile::update_profile, verify_otp::verify_otp,
};

pub use crate::routes::auth::{AppState, SharedAuthService};

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(app_state)
        .app_data(json_config())
        .wrap(create_cors(environment))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/auth")
                .route("/register", web::post().to(register))
                .route("/verify-otp", web::post().to(verify_otp))
                .route("/resend-otp", web::post().to(resend_otp))
                .route("/login", web::post().to(login))
                .route("/me", web::get().to(me))
                .route("/updateprofile", web::put().to(update_profile)),
        )
        .default_service(web::route().to(not_found))
}

/// Malformed JSON bodies get the same error shape as every other failure
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(
            error_codes::VALIDATION_ERROR,
            format!("Invalid request body: {}", err),
        ));
        InternalError::from_response(err, response).into()
    })
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "cvacare-api",
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
