//! Token issuing and validation under one fixed secret and policy.
//! Used by: state, handlers.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::config::TokenConfig;
use crate::error::{Error, Result};
use crate::token::claims::{self, Claims};
use crate::token::sign::sign_token;
use crate::token::verify::{verify_token, Verification};

/// Immutable after construction; share it behind an `Arc` and call from any task.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: Option<String>,
    audience: Option<String>,
    lifetime: Duration,
}

impl TokenService {
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.key().as_bytes()),
            decoding_key: DecodingKey::from_secret(config.key().as_bytes()),
            issuer: config.issuer().map(str::to_owned),
            audience: config.audience().map(str::to_owned),
            lifetime: Duration::try_seconds(config.expiration_secs()).unwrap_or(Duration::MAX),
        }
    }

    pub fn issue(&self, claims: Claims) -> Result<String> {
        self.issue_at(claims, Utc::now())
    }

    /// Stamps `iss`/`aud`/`exp` over the caller's claims and signs them.
    pub fn issue_at(&self, mut claims: Claims, now: DateTime<Utc>) -> Result<String> {
        let exp = now
            .checked_add_signed(self.lifetime)
            .ok_or_else(|| Error::Signing("expiration out of range".into()))?
            .timestamp();
        claims::stamp(&mut claims, self.issuer.as_deref(), self.audience.as_deref(), exp);
        sign_token(&claims, &self.encoding_key)
    }

    pub fn verify(&self, token: &str) -> Result<Verification> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Verification> {
        verify_token(token, &self.decoding_key, now)
    }
}
