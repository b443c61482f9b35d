use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use super::config::TokenServiceConfig;
use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

/// Issues and validates session tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Signs a fresh token for `user_id`
    pub fn generate(&self, user_id: Uuid) -> Result<String, TokenError> {
        let claims = Claims::new(user_id, &self.config.issuer, self.config.expiry_days);
        self.encode_jwt(&claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, event = "token_generation_failed", "Failed to sign token");
            TokenError::TokenGenerationFailed
        })
    }

    /// Checks signature, expiry and issuer and returns the claims
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                _ => TokenError::InvalidToken,
            })
    }

    pub fn expiry_days(&self) -> i64 {
        self.config.expiry_days
    }
}
