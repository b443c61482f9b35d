//! Email address helpers
//!
//! Emails are the subject key for verification codes, so every layer must
//! agree on one normalized form.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)+$")
        .expect("email regex is valid")
});

/// Maximum length of an address (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Trim and lowercase an address
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check the shape of an already-normalized or raw address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.len() <= MAX_EMAIL_LENGTH && EMAIL_REGEX.is_match(email)
}

/// Mask an address for logging: `jane.doe@example.com` -> `j***@example.com`
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Jane.Doe@Example.COM "), "jane.doe@example.com");
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("patient+therapy@cva-care.org"));
        assert!(is_valid_email(" padded@example.com "));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@-bad.com"));
        assert!(!is_valid_email("two@@x.com"));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jane.doe@example.com"), "j***@example.com");
        assert_eq!(mask_email("@example.com"), "***");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
