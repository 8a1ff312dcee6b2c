//! Token validity endpoint.
//! Used by: server.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::error::Result;
use crate::handlers::bearer::bearer_token;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CheckResponse {
    pub valid: bool,
}

pub async fn check(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CheckResponse>> {
    let token = bearer_token(&headers)
        .inspect_err(|e| tracing::warn!(error = %e, "no usable bearer token"))?;
    let verification = state
        .tokens
        .verify(token)
        .inspect_err(|e| tracing::warn!(error = %e, "token rejected"))?;
    Ok(Json(CheckResponse {
        valid: verification.is_valid(),
    }))
}
