//! Verification email content

/// Rendered verification email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

impl OtpEmail {
    pub fn render(code: &str, ttl_minutes: i64) -> Self {
        let subject = "Your CVACare verification code".to_string();

        let text = format!(
            "Welcome to CVACare!\n\n\
             Your verification code is: {code}\n\n\
             This code expires in {ttl_minutes} minutes. \
             If you did not create an account, you can ignore this email."
        );

        let html = format!(
            "<div style=\"font-family: Arial, sans-serif; max-width: 480px; margin: 0 auto;\">\
             <h2 style=\"color: #C9302C;\">Verify your email</h2>\
             <p>Welcome to CVACare! Use the code below to verify your email address.</p>\
             <p style=\"font-size: 32px; font-weight: bold; letter-spacing: 8px;\">{code}</p>\
             <p>This code expires in {ttl_minutes} minutes.</p>\
             <p style=\"color: #777; font-size: 12px;\">If you did not create an account, you can ignore this email.</p>\
             </div>"
        );

        Self { subject, html, text }
    }
}
