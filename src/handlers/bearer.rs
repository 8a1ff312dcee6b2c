//! `Authorization: Bearer <token>` extraction.
//! Used by: handlers::check, handlers::decode.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

use crate::error::{Error, Result};

/// Returns the bearer token, or `MissingToken` when there is none to check.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Err(Error::MissingToken);
    };
    let value = value.to_str().map_err(|_| Error::BadAuthorizationHeader)?;
    if value.is_empty() {
        return Err(Error::MissingToken);
    }

    let parts: Vec<&str> = value.split(' ').collect();
    match parts[..] {
        [scheme, token] if scheme.eq_ignore_ascii_case("bearer") => {
            if token.is_empty() {
                Err(Error::MissingToken)
            } else {
                Ok(token)
            }
        }
        _ => Err(Error::BadAuthorizationHeader),
    }
}
