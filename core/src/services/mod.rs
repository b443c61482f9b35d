//! Business services containing domain logic and use cases.

pub mod auth;
pub mod password;
pub mod token;
pub mod verification;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, ProfileUpdate};
pub use password::PasswordHasher;
pub use token::{TokenService, TokenServiceConfig};
pub use verification::{
    Clock, CodeGenerator, CodeStore, Notifier, OsRngCodeGenerator, SystemClock,
    VerificationCodeService, VerificationServiceConfig,
};
