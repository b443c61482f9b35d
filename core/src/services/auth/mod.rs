//! Authentication service module
//!
//! This module provides the account flows built on top of email verification:
//! - Registration with a one-time code sent by email
//! - Code verification and resend
//! - Password login and session tokens
//! - Profile lookup and update

mod config;
mod service;
mod validation;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::{AuthService, ProfileUpdate};
pub use validation::{validate_email, validate_name, validate_password};
