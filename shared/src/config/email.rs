//! Outbound email configuration

use serde::{Deserialize, Serialize};

/// Email delivery provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Log the message instead of sending it
    #[default]
    Mock,
    Brevo,
}

impl std::str::FromStr for EmailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "brevo" => Ok(Self::Brevo),
            _ => Err(format!("Invalid email provider: {}", s)),
        }
    }
}

/// Settings for sending verification emails
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    pub provider: EmailProvider,
    #[serde(default)]
    pub api_key: String,
    pub api_url: String,
    pub sender_address: String,
    pub sender_name: String,
    pub request_timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::Mock,
            api_key: String::new(),
            api_url: String::from("https://api.brevo.com/v3/smtp/email"),
            sender_address: String::from("no-reply@cvacare.app"),
            sender_name: String::from("CVACare"),
            request_timeout_secs: 15,
        }
    }
}

impl EmailConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: super::env_or("EMAIL_PROVIDER", defaults.provider),
            api_key: std::env::var("BREVO_API_KEY").unwrap_or(defaults.api_key),
            api_url: std::env::var("BREVO_API_URL").unwrap_or(defaults.api_url),
            sender_address: std::env::var("EMAIL_SENDER_ADDRESS")
                .unwrap_or(defaults.sender_address),
            sender_name: std::env::var("EMAIL_SENDER_NAME").unwrap_or(defaults.sender_name),
            request_timeout_secs: super::env_or(
                "EMAIL_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            ),
        }
    }
}
