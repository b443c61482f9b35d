//! HTTP tests for registration, email verification and session endpoints

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::TestApp;
use cva_api::create_app;
use cva_shared::Environment;

macro_rules! app {
    ($test_app:expr) => {
        test::init_service(create_app($test_app.state.clone(), Environment::Development)).await
    };
}

fn register_body(email: &str) -> Value {
    json!({ "name": "Maria Santos", "email": email, "password": "secret123" })
}

#[actix_rt::test]
async fn test_health_check() {
    let test_app = TestApp::new();
    let app = app!(test_app);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_rt::test]
async fn test_full_account_flow() {
    let test_app = TestApp::new();
    let app = app!(test_app);

    // Register
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body("maria@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Registration successful. Please verify your email with the OTP sent."
    );
    assert_eq!(body["data"]["requires_verification"], true);

    // Login is refused until the email is verified
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "maria@example.com", "password": "secret123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "EMAIL_NOT_VERIFIED");

    // Verify
    let code = test_app.code_for("maria@example.com");
    let req = test::TestRequest::post()
        .uri("/api/auth/verify-otp")
        .set_json(json!({ "email": "maria@example.com", "otp": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email verified successfully");
    assert_eq!(body["data"]["user"]["is_verified"], true);
    assert!(body["data"]["user"].get("password_hash").is_none());

    // Login
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "maria@example.com", "password": "secret123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let token = body["data"]["token"].as_str().unwrap().to_string();

    // Current user
    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["email"], "maria@example.com");

    // Profile update keeps the verified flag
    let req = test::TestRequest::put()
        .uri("/api/auth/updateprofile")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({ "name": "Maria S.", "email": "maria.s@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["name"], "Maria S.");
    assert_eq!(body["data"]["email"], "maria.s@example.com");
    assert_eq!(body["data"]["is_verified"], true);
}

#[actix_rt::test]
async fn test_verify_otp_error_codes() {
    let test_app = TestApp::new();
    let app = app!(test_app);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body("maria@example.com"))
        .to_request();
    test::call_service(&app, req).await;
    let code = test_app.code_for("maria@example.com");
    let wrong = if code == "000000" { "111111" } else { "000000" };

    let cases = [
        ("maria@example.com", "12ab56", StatusCode::BAD_REQUEST, "OTP_MALFORMED"),
        ("nobody@example.com", code.as_str(), StatusCode::NOT_FOUND, "USER_NOT_FOUND"),
        ("maria@example.com", wrong, StatusCode::BAD_REQUEST, "OTP_MISMATCH"),
        ("maria@example.com", code.as_str(), StatusCode::OK, ""),
        ("maria@example.com", code.as_str(), StatusCode::BAD_REQUEST, "OTP_ALREADY_USED"),
    ];

    for (email, otp, status, error_code) in cases {
        let req = test::TestRequest::post()
            .uri("/api/auth/verify-otp")
            .set_json(json!({ "email": email, "otp": otp }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), status, "otp {} for {}", otp, email);

        if !error_code.is_empty() {
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], false);
            assert_eq!(body["code"], error_code);
        }
    }
}

#[actix_rt::test]
async fn test_resend_otp() {
    let test_app = TestApp::new();
    let app = app!(test_app);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body("maria@example.com"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/resend-otp")
        .set_json(json!({ "email": "maria@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "OTP resent successfully");
    assert_eq!(test_app.notifier.sent_count(), 2);

    let code = test_app.code_for("maria@example.com");
    let req = test::TestRequest::post()
        .uri("/api/auth/verify-otp")
        .set_json(json!({ "email": "maria@example.com", "otp": code }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/auth/resend-otp")
        .set_json(json!({ "email": "maria@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "ALREADY_VERIFIED");
}

#[actix_rt::test]
async fn test_resend_cooldown_returns_retry_after() {
    let test_app = TestApp::with_verification(cva_core::VerificationServiceConfig {
        code_ttl_minutes: 10,
        resend_cooldown_seconds: 60,
    });
    let app = app!(test_app);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body("maria@example.com"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/resend-otp")
        .set_json(json!({ "email": "maria@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(resp.headers().contains_key("retry-after"));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "RESEND_TOO_SOON");
}

#[actix_rt::test]
async fn test_registration_conflicts_and_validation() {
    let test_app = TestApp::new();
    let app = app!(test_app);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body("maria@example.com"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body("maria@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "USER_ALREADY_EXISTS");

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "name": "", "email": "bad", "password": "1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["errors"]["email"].is_array());

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_protected_routes_require_token() {
    let test_app = TestApp::new();
    let app = app!(test_app);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/auth/me").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "TOKEN_INVALID");
}

#[actix_rt::test]
async fn test_unknown_route() {
    let test_app = TestApp::new();
    let app = app!(test_app);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/nope").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_register_accepts_untrimmed_email() {
    let test_app = TestApp::new();
    let app = app!(test_app);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body("  Maria@Example.com "))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["email"], "maria@example.com");
    assert!(test_app.notifier.last_code_for("maria@example.com").is_some());
}
