//! JWT session token generation and validation

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::account::AccountId;
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Session claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: i64,
    /// Account the session acts on behalf of
    pub account_id: i64,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl SessionClaims {
    /// Create new claims for a user acting on an account
    pub fn new(user_id: UserId, account_id: AccountId, expiration_hours: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours as i64);

        Self {
            sub: user_id.value(),
            account_id: account_id.value(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    pub fn user_id(&self) -> UserId {
        UserId::new(self.sub)
    }

    pub fn account_id(&self) -> AccountId {
        AccountId::new(self.account_id)
    }
}

/// Configuration for JWT service
#[derive(Clone)]
pub struct JwtConfig {
    /// Shared HS256 signing secret
    pub secret: String,
    /// Token expiration time in hours
    pub expiration_hours: u64,
}

impl Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[hidden]")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_hours: u64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }
}

/// HS256 session token service
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("config", &self.config)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Mint a session token for a user acting on an account
    pub fn generate(&self, user_id: UserId, account_id: AccountId) -> Result<String, DomainError> {
        let claims = SessionClaims::new(user_id, account_id, self.config.expiration_hours);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to generate JWT: {}", e)))
    }

    /// Verify signature and expiry, returning the claims
    pub fn validate(&self, token: &str) -> Result<SessionClaims, DomainError> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| DomainError::validation(format!("Invalid JWT: {}", e)))?;

        Ok(token_data.claims)
    }

    pub fn expiration_hours(&self) -> u64 {
        self.config.expiration_hours
    }
}
