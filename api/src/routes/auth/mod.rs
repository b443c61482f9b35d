//! Authentication route handlers
//!
//! - Registration and email verification by one-time code
//! - Code resend
//! - Password login
//! - Current user and profile update (bearer token required)

pub mod login;
pub mod me;
pub mod register;
pub mod resend_otp;
pub mod update_profile;
pub mod verify_otp;

use std::sync::Arc;

use cva_core::{AuthService, CodeStore, Notifier, UserRepository};

/// Auth service wired with runtime-selected backends
pub type SharedAuthService = AuthService<dyn UserRepository, dyn CodeStore, dyn Notifier>;

/// Application state shared across handlers
pub struct AppState {
    pub auth_service: Arc<SharedAuthService>,
}

impl AppState {
    pub fn new(auth_service: Arc<SharedAuthService>) -> Self {
        Self { auth_service }
    }
}
