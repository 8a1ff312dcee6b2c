//! Claims decoding endpoint.
//! Used by: server.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::error::{Error, Result};
use crate::handlers::bearer::bearer_token;
use crate::state::AppState;
use crate::token::Claims;

pub async fn decode(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<Claims>> {
    let token = bearer_token(&headers)
        .inspect_err(|e| tracing::warn!(error = %e, "no usable bearer token"))?;
    let verification = state
        .tokens
        .verify(token)
        .inspect_err(|e| tracing::warn!(error = %e, "token rejected"))?;
    verification
        .into_claims()
        .map(Json)
        .ok_or(Error::TokenExpired)
}
