//! Mock email notifier for development and testing

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use cva_core::{DeliveryError, Notifier};
use cva_shared::utils::email::mask_email;

/// Most recent sends kept for [`MockEmailNotifier::last_code_for`]
pub const OUTBOX_CAPACITY: usize = 100;

/// Records codes instead of sending them
///
/// Only the latest [`OUTBOX_CAPACITY`] sends are kept. With console output
/// enabled the code is printed to stdout so the verification flow can be
/// completed by hand; it never goes through `tracing`.
#[derive(Default)]
pub struct MockEmailNotifier {
    outbox: Mutex<VecDeque<(String, String)>>,
    sent: AtomicUsize,
    should_fail: AtomicBool,
    console_output: bool,
}

impl MockEmailNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print each code to the console (development only)
    pub fn with_console_output(console_output: bool) -> Self {
        Self {
            console_output,
            ..Self::default()
        }
    }

    /// Make every subsequent send fail
    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn last_code_for(&self, email: &str) -> Option<String> {
        self.outbox
            .lock()
            .ok()?
            .iter()
            .rev()
            .find(|(to, _)| to == email)
            .map(|(_, code)| code.clone())
    }

    /// Successful sends since creation
    pub fn sent_count(&self) -> usize {
        self.sent.load(Ordering::SeqCst)
    }

    /// Sends currently retained
    pub fn outbox_len(&self) -> usize {
        self.outbox.lock().map(|outbox| outbox.len()).unwrap_or(0)
    }
}

#[async_trait]
impl Notifier for MockEmailNotifier {
    async fn send(&self, subject_id: &str, code: &str) -> Result<(), DeliveryError> {
        if self.should_fail.load(Ordering::SeqCst) {
            tracing::warn!(
                to = %mask_email(subject_id),
                event = "mock_email_failed",
                "Mock email delivery failure"
            );
            return Err(DeliveryError::new("mock email delivery failure"));
        }

        {
            let mut outbox = self
                .outbox
                .lock()
                .map_err(|_| DeliveryError::new("mock outbox poisoned"))?;
            if outbox.len() == OUTBOX_CAPACITY {
                outbox.pop_front();
            }
            outbox.push_back((subject_id.to_string(), code.to_string()));
        }
        let count = self.sent.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK EMAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", subject_id);
            println!("Verification code: {}", code);
            println!("{}\n", "=".repeat(60));
        }

        tracing::info!(
            to = %mask_email(subject_id),
            event = "mock_email_sent",
            "[MOCK EMAIL] Verification code recorded"
        );

        Ok(())
    }
}
