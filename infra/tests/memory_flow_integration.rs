//! Account flow over the in-memory stores and the mock email notifier

use std::sync::Arc;

use cva_core::{
    AuthError, AuthService, AuthServiceConfig, DomainError, PasswordHasher, TokenService,
    TokenServiceConfig, VerificationCodeService, VerificationError, VerificationServiceConfig,
};
use cva_infra::{InMemoryCodeStore, InMemoryUserRepository, MockEmailNotifier};

#[tokio::test]
async fn test_register_verify_login_with_mock_email() {
    let notifier = Arc::new(MockEmailNotifier::new());
    let verification = Arc::new(VerificationCodeService::new(
        Arc::new(InMemoryCodeStore::new()),
        VerificationServiceConfig::default(),
    ));
    let auth = AuthService::new(
        Arc::new(InMemoryUserRepository::new()),
        verification,
        notifier.clone(),
        Arc::new(TokenService::new(TokenServiceConfig::default())),
        PasswordHasher::new(4),
        AuthServiceConfig::default(),
    );

    let outcome = auth
        .register("Juan Dela Cruz", "juan@example.com", "secret123")
        .await
        .unwrap();
    assert!(outcome.code_sent);

    let code = notifier.last_code_for("juan@example.com").unwrap();
    assert_eq!(code.len(), 6);

    let verified = auth.verify_otp("juan@example.com", &code).await.unwrap();
    assert!(verified.user.is_verified);

    assert!(matches!(
        auth.resend_otp("juan@example.com").await,
        Err(DomainError::Verification(VerificationError::AlreadyVerified))
    ));
    assert!(matches!(
        auth.login("juan@example.com", "wrong").await,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert!(auth.login("juan@example.com", "secret123").await.is_ok());
}
