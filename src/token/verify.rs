//! HMAC token verification.
//! Used by: token::service.

use std::str::FromStr;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use jsonwebtoken::{crypto, Algorithm, DecodingKey};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::token::claims::{self, Claims};

/// Outcome of checking a token whose signature holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Verification {
    /// Signature verified and the token is inside its validity window.
    Valid(Claims),
    /// Signature verified but `exp` has passed or `nbf` is still ahead.
    Expired,
}

impl Verification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verification::Valid(_))
    }

    pub fn into_claims(self) -> Option<Claims> {
        match self {
            Verification::Valid(claims) => Some(claims),
            Verification::Expired => None,
        }
    }
}

pub fn verify_token(token: &str, key: &DecodingKey, now: DateTime<Utc>) -> Result<Verification> {
    let segments: Vec<&str> = token.split('.').collect();
    let [header_b64, payload_b64, sig_b64] = segments[..] else {
        return Err(Error::InvalidSegmentCount(segments.len()));
    };

    let algorithm = hmac_algorithm(header_b64)?;

    // Strict decode first: non-canonical trailing bits must not verify.
    URL_SAFE_NO_PAD
        .decode(sig_b64)
        .map_err(|_| Error::InvalidSignature)?;
    let message = &token[..header_b64.len() + 1 + payload_b64.len()];
    let verified = crypto::verify(sig_b64, message.as_bytes(), key, algorithm)
        .map_err(|_| Error::InvalidSignature)?;
    if !verified {
        return Err(Error::InvalidSignature);
    }

    let claims: Claims = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload_b64)?)?;
    if claims::is_current(&claims, now) {
        Ok(Verification::Valid(claims))
    } else {
        Ok(Verification::Expired)
    }
}

/// Reads `alg` from the header segment and admits only the HS* family.
fn hmac_algorithm(header_b64: &str) -> Result<Algorithm> {
    let header: Value = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(header_b64)?)?;
    let alg = header
        .get("alg")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Malformed("header has no alg".into()))?;
    match Algorithm::from_str(alg) {
        Ok(a @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => Ok(a),
        _ => Err(Error::AlgorithmMismatch(alg.to_owned())),
    }
}
