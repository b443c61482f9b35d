//! Email delivery of verification codes
//!
//! Provides `Notifier` implementations:
//! - `MockEmailNotifier`: records recent sends, prints codes in development
//! - `BrevoEmailNotifier`: Brevo transactional email API over HTTPS

pub mod brevo;
pub mod mock_email;
pub mod template;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use cva_core::Notifier;
use cva_shared::config::{EmailConfig, EmailProvider, Environment};

use crate::InfrastructureError;

pub use brevo::BrevoEmailNotifier;
pub use mock_email::{MockEmailNotifier, OUTBOX_CAPACITY};
pub use template::OtpEmail;

/// Create the notifier selected by `config.provider`
///
/// The mock prints codes to the console in development. An unusable Brevo
/// configuration is an error, like an unreachable code or user store.
pub fn create_notifier(
    config: &EmailConfig,
    environment: Environment,
    code_ttl_minutes: i64,
) -> Result<Arc<dyn Notifier>, InfrastructureError> {
    match config.provider {
        EmailProvider::Mock => {
            tracing::warn!("Using mock email service; verification codes are not emailed");
            Ok(Arc::new(MockEmailNotifier::with_console_output(
                environment.is_development(),
            )))
        }
        EmailProvider::Brevo => {
            let notifier = BrevoEmailNotifier::new(config.clone(), code_ttl_minutes)?;
            Ok(Arc::new(notifier))
        }
    }
}
