use cva_shared::config::{EmailConfig, EmailProvider, Environment};

use crate::email::{create_notifier, BrevoEmailNotifier, OtpEmail};
use crate::InfrastructureError;

fn brevo_config() -> EmailConfig {
    EmailConfig {
        provider: EmailProvider::Brevo,
        api_key: "xkeysib-test".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_requires_api_key() {
    let config = EmailConfig {
        api_key: "  ".to_string(),
        ..brevo_config()
    };

    assert!(matches!(
        BrevoEmailNotifier::new(config, 10),
        Err(InfrastructureError::Config(_))
    ));
}

#[test]
fn test_request_body_shape() {
    let notifier = BrevoEmailNotifier::new(brevo_config(), 10).unwrap();
    let body = serde_json::to_value(notifier.build_body("maria@example.com", "048213")).unwrap();

    assert_eq!(body["sender"]["email"], "no-reply@cvacare.app");
    assert_eq!(body["sender"]["name"], "CVACare");
    assert_eq!(body["to"][0]["email"], "maria@example.com");
    assert!(body["to"][0].get("name").is_none());
    assert!(body["htmlContent"].as_str().unwrap().contains("048213"));
    assert!(body["textContent"].as_str().unwrap().contains("10 minutes"));
}

#[test]
fn test_template_keeps_leading_zeros() {
    let email = OtpEmail::render("000417", 10);
    assert!(email.text.contains("000417"));
    assert!(email.html.contains("000417"));
}

#[test]
fn test_factory_rejects_unusable_brevo_config() {
    let config = EmailConfig {
        api_key: String::new(),
        ..brevo_config()
    };

    assert!(matches!(
        create_notifier(&config, Environment::Production, 10),
        Err(InfrastructureError::Config(_))
    ));
}

#[test]
fn test_factory_builds_configured_brevo() {
    assert!(create_notifier(&brevo_config(), Environment::Production, 10).is_ok());
}
