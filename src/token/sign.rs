//! HS256 compact token signing.
//! Used by: token::service.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::error::{Error, Result};
use crate::token::claims::Claims;

pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

pub fn sign_token(claims: &Claims, key: &EncodingKey) -> Result<String> {
    encode(&Header::new(SIGNING_ALGORITHM), claims, key).map_err(|e| Error::Signing(e.to_string()))
}
