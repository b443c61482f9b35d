//! Verification service module for email one-time passcodes
//!
//! This module provides the complete code lifecycle:
//! - Code generation from an injected source (OS CSPRNG in production)
//! - Storage with overwrite semantics, one record per subject
//! - Validation with a fixed, deterministic error precedence
//! - Single-use consumption and time-based expiry
//! - Optional resend cooldown

mod config;
mod service;
mod traits;

#[cfg(test)]
pub(crate) mod tests;

pub use config::VerificationServiceConfig;
pub use service::VerificationCodeService;
pub use traits::{Clock, CodeGenerator, CodeStore, Notifier, OsRngCodeGenerator, SystemClock};
