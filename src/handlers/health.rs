//! Liveness check with an empty 200 response.
//! Used by: server.

use axum::http::StatusCode;

pub async fn health() -> StatusCode {
    StatusCode::OK
}
