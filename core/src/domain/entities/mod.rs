//! Domain entities representing core business objects.

pub mod token;
pub mod user;
pub mod verification_record;

#[cfg(test)]
mod tests;

pub use token::{Claims, JWT_ISSUER};
pub use user::User;
pub use verification_record::{
    is_well_formed_code, VerificationRecord, CODE_LENGTH, DEFAULT_TTL_MINUTES, MAX_CODE_VALUE,
};
