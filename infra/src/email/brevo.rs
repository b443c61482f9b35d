//! Brevo transactional email notifier

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use cva_core::{DeliveryError, Notifier};
use cva_shared::config::EmailConfig;
use cva_shared::utils::email::mask_email;

use super::template::OtpEmail;
use crate::InfrastructureError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BrevoEmailAddress {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BrevoSendEmailBody {
    pub sender: BrevoEmailAddress,
    pub to: Vec<BrevoEmailAddress>,
    pub subject: String,
    pub html_content: String,
    pub text_content: String,
}

/// Sends verification codes through `POST /v3/smtp/email`
pub struct BrevoEmailNotifier {
    client: Client,
    config: EmailConfig,
    code_ttl_minutes: i64,
}

impl BrevoEmailNotifier {
    pub fn new(config: EmailConfig, code_ttl_minutes: i64) -> Result<Self, InfrastructureError> {
        if config.api_key.trim().is_empty() {
            return Err(InfrastructureError::Config("BREVO_API_KEY is required".to_string()));
        }
        if config.sender_address.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "EMAIL_SENDER_ADDRESS is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            config,
            code_ttl_minutes,
        })
    }

    pub(crate) fn build_body(&self, to: &str, code: &str) -> BrevoSendEmailBody {
        let email = OtpEmail::render(code, self.code_ttl_minutes);
        let sender_name = self.config.sender_name.trim();

        BrevoSendEmailBody {
            sender: BrevoEmailAddress {
                email: self.config.sender_address.clone(),
                name: (!sender_name.is_empty()).then(|| sender_name.to_string()),
            },
            to: vec![BrevoEmailAddress {
                email: to.to_string(),
                name: None,
            }],
            subject: email.subject,
            html_content: email.html,
            text_content: email.text,
        }
    }

    async fn post(&self, body: &BrevoSendEmailBody) -> Result<(), InfrastructureError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .header("api-key", &self.config.api_key)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let detail = response.text().await.unwrap_or_default();
        Err(InfrastructureError::Email(format!(
            "Brevo send failed (status={}): {}",
            status.as_u16(),
            detail
        )))
    }
}

#[async_trait]
impl Notifier for BrevoEmailNotifier {
    async fn send(&self, subject_id: &str, code: &str) -> Result<(), DeliveryError> {
        let body = self.build_body(subject_id, code);

        match self.post(&body).await {
            Ok(()) => {
                tracing::info!(
                    to = %mask_email(subject_id),
                    event = "otp_email_sent",
                    provider = "brevo",
                    "Verification email sent"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    to = %mask_email(subject_id),
                    event = "otp_email_failed",
                    provider = "brevo",
                    error = %e,
                    "Verification email failed"
                );
                Err(e.into())
            }
        }
    }
}
