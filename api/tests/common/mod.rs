//! Application wiring shared by the HTTP tests

use actix_web::web;
use std::sync::Arc;

use cva_api::AppState;
use cva_core::{
    AuthService, AuthServiceConfig, CodeStore, Notifier, PasswordHasher, TokenService,
    TokenServiceConfig, UserRepository, VerificationCodeService, VerificationServiceConfig,
};
use cva_infra::{InMemoryCodeStore, InMemoryUserRepository, MockEmailNotifier};

pub struct TestApp {
    pub state: web::Data<AppState>,
    pub notifier: Arc<MockEmailNotifier>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_verification(VerificationServiceConfig::default())
    }

    pub fn with_verification(config: VerificationServiceConfig) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let store: Arc<dyn CodeStore> = Arc::new(InMemoryCodeStore::new());
        let notifier = Arc::new(MockEmailNotifier::new());
        let notifier_dyn: Arc<dyn Notifier> = notifier.clone();

        let tokens = Arc::new(TokenService::new(TokenServiceConfig {
            jwt_secret: "http-test-secret".to_string(),
            ..Default::default()
        }));

        let auth_service = Arc::new(AuthService::new(
            users,
            Arc::new(VerificationCodeService::new(store, config)),
            notifier_dyn,
            tokens,
            PasswordHasher::new(4),
            AuthServiceConfig::default(),
        ));

        Self {
            state: web::Data::new(AppState::new(auth_service)),
            notifier,
        }
    }

    pub fn code_for(&self, email: &str) -> String {
        self.notifier
            .last_code_for(email)
            .expect("no code was emailed")
    }
}
