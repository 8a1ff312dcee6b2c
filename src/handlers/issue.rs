//! Token issuing endpoint.
//! Used by: server.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::state::AppState;
use crate::token::Claims;

/// Decodes the request body into a claims object. The service itself accepts any object,
/// including an empty one; an absent body or a non-object is rejected here.
fn parse_claims(body: &[u8]) -> Result<Claims> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::UnprocessableBody("empty body".into()));
    }
    let value: Value =
        serde_json::from_slice(body).map_err(|e| Error::InvalidBody(e.to_string()))?;
    match value {
        Value::Object(claims) => Ok(claims),
        other => Err(Error::UnprocessableBody(format!(
            "expected a JSON object, got {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub async fn issue(State(state): State<AppState>, body: Bytes) -> Result<Json<String>> {
    let claims = parse_claims(&body)
        .inspect_err(|e| tracing::warn!(error = %e, "rejected claims body"))?;
    let keys: Vec<&str> = claims.keys().map(String::as_str).collect();
    tracing::debug!(claims = ?keys, "issuing token");
    let token = state.tokens.issue(claims)?;
    Ok(Json(token))
}
