mod brevo_tests;
mod mock_email_tests;
