//! Free-form token claims and the reserved keys the service manages.
//! Used by: token::sign, token::verify, token::service, handlers.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Arbitrary caller-supplied claims, keyed by name.
pub type Claims = Map<String, Value>;

pub const ISSUER: &str = "iss";
pub const AUDIENCE: &str = "aud";
pub const EXPIRES_AT: &str = "exp";
pub const NOT_BEFORE: &str = "nbf";

/// Writes the reserved claims over whatever the caller supplied.
/// Empty issuer or audience leaves the key untouched.
pub fn stamp(claims: &mut Claims, issuer: Option<&str>, audience: Option<&str>, exp: i64) {
    if let Some(iss) = issuer.filter(|s| !s.is_empty()) {
        claims.insert(ISSUER.into(), Value::from(iss));
    }
    if let Some(aud) = audience.filter(|s| !s.is_empty()) {
        claims.insert(AUDIENCE.into(), Value::from(aud));
    }
    claims.insert(EXPIRES_AT.into(), Value::from(exp));
}

/// Reads a NumericDate claim. Anything but a JSON number counts as absent.
pub fn numeric_date(claims: &Claims, key: &str) -> Option<f64> {
    claims.get(key).and_then(Value::as_f64)
}

/// True when `now` falls inside the `nbf`..=`exp` window of the claims.
/// `iat` is informational and never checked.
pub fn is_current(claims: &Claims, now: DateTime<Utc>) -> bool {
    let now = now.timestamp() as f64;
    let expired = numeric_date(claims, EXPIRES_AT).is_some_and(|exp| now > exp);
    let premature = numeric_date(claims, NOT_BEFORE).is_some_and(|nbf| now < nbf);
    !expired && !premature
}
