//! CORS configuration for the mobile and web clients
//!
//! Development allows any origin. Production only allows the origins listed
//! in `ALLOWED_ORIGINS` plus the app schemes used by the mobile builds.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use cva_shared::Environment;
use std::env;

const DEFAULT_MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance configured for `environment`
///
/// # Environment Variables
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (production only)
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors(environment: Environment) -> Cors {
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_AGE);

    if environment.is_production() {
        let origins = env::var("ALLOWED_ORIGINS").unwrap_or_default();
        create_production_cors(&origins, max_age)
    } else {
        create_development_cors(max_age)
    }
}

fn allowed_methods() -> Vec<Method> {
    vec![
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::OPTIONS,
    ]
}

fn create_development_cors(max_age: usize) -> Cors {
    tracing::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![
            header::RETRY_AFTER,
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(max_age)
        .supports_credentials()
}

fn create_production_cors(allowed_origins: &str, max_age: usize) -> Cors {
    tracing::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![
            header::RETRY_AFTER,
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(max_age);

    for origin in parse_origins(allowed_origins) {
        tracing::info!(origin, "Adding allowed origin");
        cors = cors.allowed_origin(origin);
    }

    // Capacitor and Expo builds
    cors = cors.allowed_origin("capacitor://localhost");
    cors = cors.allowed_origin("http://localhost");
    cors = cors.allowed_origin("https://localhost");

    cors
}

fn parse_origins(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(" https://app.cvacare.ph, ,https://admin.cvacare.ph "),
            vec!["https://app.cvacare.ph", "https://admin.cvacare.ph"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_create_cors_for_each_environment() {
        let _ = create_cors(Environment::Development);
        let _ = create_production_cors("https://app.cvacare.ph", DEFAULT_MAX_AGE);
    }
}
