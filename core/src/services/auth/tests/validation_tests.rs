use crate::errors::ValidationError;
use crate::services::auth::{validate_email, validate_name, validate_password, AuthServiceConfig};

#[test]
fn test_name_is_trimmed_and_bounded() {
    let config = AuthServiceConfig::default();

    assert_eq!(validate_name("  Maria Santos ", &config).unwrap(), "Maria Santos");
    assert_eq!(
        validate_name("   ", &config),
        Err(ValidationError::RequiredField {
            field: "name".to_string()
        })
    );
    assert!(matches!(
        validate_name(&"a".repeat(101), &config),
        Err(ValidationError::InvalidLength { max: 100, .. })
    ));
    assert!(validate_name(&"a".repeat(100), &config).is_ok());
}

#[test]
fn test_email_is_normalized() {
    assert_eq!(validate_email("  Maria@Example.COM ").unwrap(), "maria@example.com");
    assert_eq!(validate_email("not-an-email"), Err(ValidationError::InvalidEmail));
    assert_eq!(
        validate_email(""),
        Err(ValidationError::RequiredField {
            field: "email".to_string()
        })
    );
}

#[test]
fn test_password_length() {
    let config = AuthServiceConfig::default();

    assert!(validate_password("secret", &config).is_ok());
    assert!(matches!(
        validate_password("short", &config),
        Err(ValidationError::InvalidLength { min: 6, .. })
    ));
    assert!(matches!(
        validate_password(&"x".repeat(73), &config),
        Err(ValidationError::InvalidLength { .. })
    ));
    assert_eq!(validate_password("", &config).unwrap_err().field(), "password");
}
