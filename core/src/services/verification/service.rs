//! Verification service implementation

use constant_time_eq::constant_time_eq;
use cva_shared::utils::email::mask_email;
use std::sync::Arc;

use crate::domain::entities::verification_record::{is_well_formed_code, VerificationRecord};
use crate::errors::VerificationError;

use super::config::VerificationServiceConfig;
use super::traits::{Clock, CodeGenerator, CodeStore, OsRngCodeGenerator, SystemClock};

/// Issues, checks and expires one-time codes bound to a subject
///
/// The service never sends codes itself. Callers pass the code of the returned
/// record to a [`Notifier`](super::Notifier) so that a delivery failure cannot
/// roll back a code that has already been persisted.
pub struct VerificationCodeService<S: CodeStore + ?Sized> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    generator: Arc<dyn CodeGenerator>,
    config: VerificationServiceConfig,
}

impl<S: CodeStore + ?Sized> VerificationCodeService<S> {
    /// Create a service using the wall clock and the OS random generator
    pub fn new(store: Arc<S>, config: VerificationServiceConfig) -> Self {
        Self::with_collaborators(
            store,
            Arc::new(SystemClock),
            Arc::new(OsRngCodeGenerator),
            config,
        )
    }

    /// Create a service with explicit clock and generator
    pub fn with_collaborators(
        store: Arc<S>,
        clock: Arc<dyn Clock>,
        generator: Arc<dyn CodeGenerator>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            store,
            clock,
            generator,
            config,
        }
    }

    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }

    /// Generate and persist a fresh code for `subject_id`
    ///
    /// Any previous record for the subject is replaced, so earlier codes stop
    /// verifying immediately.
    pub async fn issue(&self, subject_id: &str) -> Result<VerificationRecord, VerificationError> {
        ensure_subject(subject_id)?;

        let now = self.clock.now();
        let record = VerificationRecord::new(
            subject_id.to_string(),
            self.generator.generate(),
            now,
            self.config.ttl(),
        );

        if let Err(e) = self.store.put(subject_id, &record).await {
            tracing::error!(
                subject = %mask_email(subject_id),
                event = "otp_storage_failed",
                error = %e,
                "Failed to store verification code"
            );
            return Err(e.into());
        }

        tracing::info!(
            subject = %mask_email(subject_id),
            event = "otp_issued",
            expires_at = %record.expires_at,
            "Verification code issued"
        );

        Ok(record)
    }

    /// Check a submitted code and consume it on success
    ///
    /// Failures are reported in a fixed order: malformed input first (without
    /// touching the store), then missing, expired, consumed and finally a
    /// wrong code. Failed attempts leave the stored record untouched.
    pub async fn verify(
        &self,
        subject_id: &str,
        submitted_code: &str,
    ) -> Result<VerificationRecord, VerificationError> {
        ensure_subject(subject_id)?;

        if !is_well_formed_code(submitted_code) {
            tracing::warn!(
                subject = %mask_email(subject_id),
                event = "invalid_code_format",
                "Rejected malformed verification code"
            );
            return Err(VerificationError::MalformedCode);
        }

        let mut record = self
            .store
            .get(subject_id)
            .await?
            .ok_or(VerificationError::NotFound)?;

        let now = self.clock.now();
        if record.is_expired_at(now) {
            tracing::info!(
                subject = %mask_email(subject_id),
                event = "otp_expired",
                expired_at = %record.expires_at,
                "Verification code expired"
            );
            return Err(VerificationError::Expired);
        }

        if record.consumed {
            return Err(VerificationError::AlreadyConsumed);
        }

        if !constant_time_eq(record.code.as_bytes(), submitted_code.as_bytes()) {
            tracing::warn!(
                subject = %mask_email(subject_id),
                event = "otp_verification_failed",
                "Verification code mismatch"
            );
            return Err(VerificationError::Mismatch);
        }

        record.mark_consumed();
        self.store.put(subject_id, &record).await?;

        tracing::info!(
            subject = %mask_email(subject_id),
            event = "otp_verified_success",
            "Verification code consumed"
        );

        Ok(record)
    }

    /// Replace the subject's code with a fresh one
    ///
    /// With a cooldown configured, a still-active code younger than the
    /// cooldown is kept and `ResendTooSoon` is returned instead.
    pub async fn resend(&self, subject_id: &str) -> Result<VerificationRecord, VerificationError> {
        ensure_subject(subject_id)?;

        if let Some(cooldown) = self.config.resend_cooldown() {
            if let Some(current) = self.store.get(subject_id).await? {
                let now = self.clock.now();
                let next_allowed = current.issued_at + cooldown;
                if current.is_active_at(now) && now < next_allowed {
                    let wait = next_allowed - now;
                    // Round partial seconds up so clients never retry early
                    let mut retry_after_seconds = wait.num_seconds();
                    if wait > chrono::Duration::seconds(retry_after_seconds) {
                        retry_after_seconds += 1;
                    }

                    tracing::warn!(
                        subject = %mask_email(subject_id),
                        event = "resend_too_soon",
                        retry_after_seconds,
                        "Resend requested inside cooldown window"
                    );
                    return Err(VerificationError::ResendTooSoon {
                        retry_after_seconds,
                    });
                }
            }
        }

        self.issue(subject_id).await
    }
}

fn ensure_subject(subject_id: &str) -> Result<(), VerificationError> {
    if subject_id.trim().is_empty() {
        return Err(VerificationError::InvalidSubject);
    }
    Ok(())
}
