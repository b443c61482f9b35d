//! Main authentication service implementation

use cva_shared::utils::email::mask_email;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::entities::verification_record::{is_well_formed_code, VerificationRecord};
use crate::domain::value_objects::{AuthResponse, RegistrationOutcome};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError, VerificationError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;
use crate::services::verification::{CodeStore, Notifier, VerificationCodeService};

use super::config::AuthServiceConfig;
use super::validation::{validate_email, validate_name, validate_password};

/// Fields a user may change on their own profile
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Account flows layered on the verification code service
pub struct AuthService<U, S, N>
where
    U: UserRepository + ?Sized,
    S: CodeStore + ?Sized,
    N: Notifier + ?Sized,
{
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// Issues and checks email codes
    verification_service: Arc<VerificationCodeService<S>>,
    /// Delivers codes by email
    notifier: Arc<N>,
    /// Session token management
    token_service: Arc<TokenService>,
    password_hasher: PasswordHasher,
    config: AuthServiceConfig,
}

impl<U, S, N> AuthService<U, S, N>
where
    U: UserRepository + ?Sized,
    S: CodeStore + ?Sized,
    N: Notifier + ?Sized,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        verification_service: Arc<VerificationCodeService<S>>,
        notifier: Arc<N>,
        token_service: Arc<TokenService>,
        password_hasher: PasswordHasher,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            verification_service,
            notifier,
            token_service,
            password_hasher,
            config,
        }
    }

    /// Create an unverified account and email it a verification code
    ///
    /// A failed email does not fail registration: the code is already stored
    /// and the outcome reports `code_sent = false` so the client can offer a
    /// resend.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<RegistrationOutcome> {
        let name = validate_name(name, &self.config)?;
        let email = validate_email(email)?;
        validate_password(password, &self.config)?;

        if self.user_repository.find_by_email(&email).await?.is_some() {
            tracing::info!(
                email = %mask_email(&email),
                event = "registration_duplicate",
                "Registration attempted for existing email"
            );
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.password_hasher.hash(password)?;
        let user = self
            .user_repository
            .create(User::new(name, email.clone(), password_hash))
            .await?;

        tracing::info!(
            user_id = %user.id,
            email = %mask_email(&email),
            event = "user_registered",
            "New user registered"
        );

        let record = self.verification_service.issue(&email).await?;
        let code_sent = self.deliver(&record).await.is_ok();

        Ok(RegistrationOutcome {
            user_id: user.id,
            email,
            requires_verification: true,
            code_sent,
        })
    }

    /// Check an emailed code and mark the account verified
    pub async fn verify_otp(&self, email: &str, code: &str) -> DomainResult<AuthResponse> {
        let email = validate_email(email)?;
        if code.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "otp".to_string(),
            }
            .into());
        }
        if !is_well_formed_code(code) {
            return Err(VerificationError::MalformedCode.into());
        }

        let mut user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.verification_service.verify(&email, code).await?;

        if !user.is_verified {
            user.verify();
            user = self.user_repository.update(user).await?;
        }

        tracing::info!(
            user_id = %user.id,
            event = "email_verified",
            "User email verified"
        );

        let token = self.token_service.generate(user.id)?;
        Ok(AuthResponse::new(user, token))
    }

    /// Issue and email a replacement code
    ///
    /// Unlike registration, a delivery failure is reported to the caller. The
    /// new code has been stored either way.
    pub async fn resend_otp(&self, email: &str) -> DomainResult<VerificationRecord> {
        let email = validate_email(email)?;

        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if user.is_verified {
            return Err(VerificationError::AlreadyVerified.into());
        }

        let record = self.verification_service.resend(&email).await?;
        self.deliver(&record).await?;

        Ok(record)
    }

    /// Password login for verified accounts
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let email = validate_email(email)?;
        if password.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "password".to_string(),
            }
            .into());
        }

        let user = match self.user_repository.find_by_email(&email).await? {
            Some(user) if self.password_hasher.verify(password, &user.password_hash) => user,
            _ => {
                tracing::warn!(
                    email = %mask_email(&email),
                    event = "login_failed",
                    "Invalid login credentials"
                );
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !user.is_verified {
            return Err(AuthError::EmailNotVerified.into());
        }

        let token = self.token_service.generate(user.id)?;
        tracing::info!(user_id = %user.id, event = "login_success", "User logged in");

        Ok(AuthResponse::new(user, token))
    }

    /// Resolve a bearer token to its user
    pub async fn authenticate(&self, token: &str) -> DomainResult<User> {
        let claims = self.token_service.validate(token)?;
        let user_id = claims.user_id().map_err(|_| TokenError::InvalidToken)?;

        match self.user_repository.find_by_id(user_id).await? {
            Some(user) => Ok(user),
            None => Err(TokenError::InvalidToken.into()),
        }
    }

    pub async fn current_user(&self, user_id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound.into())
    }

    /// Apply a profile change
    ///
    /// Changing the email keeps the verification status.
    pub async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> DomainResult<User> {
        let mut user = self.current_user(user_id).await?;

        if let Some(name) = update.name.as_deref() {
            user.rename(validate_name(name, &self.config)?);
        }

        if let Some(email) = update.email.as_deref() {
            let email = validate_email(email)?;
            if email != user.email {
                if let Some(other) = self.user_repository.find_by_email(&email).await? {
                    if other.id != user.id {
                        return Err(AuthError::UserAlreadyExists.into());
                    }
                }
                user.change_email(email);
            }
        }

        let user = self.user_repository.update(user).await?;
        tracing::info!(user_id = %user.id, event = "profile_updated", "User profile updated");

        Ok(user)
    }

    async fn deliver(&self, record: &VerificationRecord) -> Result<(), DomainError> {
        if let Err(e) = self.notifier.send(&record.subject_id, &record.code).await {
            tracing::warn!(
                email = %mask_email(&record.subject_id),
                event = "otp_delivery_failed",
                error = %e,
                "Failed to deliver verification code"
            );
            return Err(VerificationError::from(e).into());
        }
        Ok(())
    }
}
