//! Unified error types for the token service.
//! Used by: token, handlers, state.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("token contains an invalid number of segments: {0}")]
    InvalidSegmentCount(usize),

    #[error("malformed token: {0}")]
    Malformed(String),

    #[error("unexpected signing method: {0}")]
    AlgorithmMismatch(String),

    #[error("invalid signature")]
    InvalidSignature,

    #[error("token expired")]
    TokenExpired,

    #[error("empty token string")]
    MissingToken,

    #[error("bad authorization header format")]
    BadAuthorizationHeader,

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("unprocessable request body: {0}")]
    UnprocessableBody(String),

    #[error("signing error: {0}")]
    Signing(String),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

// Decoding failures only arise while reading token segments.
impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self {
        Error::Malformed(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Malformed(e.to_string())
    }
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidSegmentCount(_)
            | Error::Malformed(_)
            | Error::AlgorithmMismatch(_)
            | Error::InvalidSignature
            | Error::TokenExpired
            | Error::MissingToken
            | Error::BadAuthorizationHeader => StatusCode::UNAUTHORIZED,
            Error::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Error::UnprocessableBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Signing(_) | Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            return (status, "internal error").into_response();
        }
        (status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_errors_return_401() {
        let errors = [
            Error::InvalidSegmentCount(1),
            Error::Malformed("bad".into()),
            Error::AlgorithmMismatch("RS256".into()),
            Error::InvalidSignature,
            Error::TokenExpired,
        ];
        for err in errors {
            assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn header_errors_return_401() {
        assert_eq!(Error::MissingToken.into_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            Error::BadAuthorizationHeader.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn body_errors_map_to_client_statuses() {
        let response = Error::InvalidBody("eof".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let response = Error::UnprocessableBody("empty".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn signing_error_returns_500() {
        let response = Error::Signing("key failure".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn decode_failures_are_malformed() {
        let err: Error = base64::DecodeError::InvalidLength(3).into();
        assert!(matches!(err, Error::Malformed(_)));
        let err: Error = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(Error::TokenExpired.to_string(), "token expired");
        assert_eq!(Error::InvalidSignature.to_string(), "invalid signature");
        assert_eq!(
            Error::AlgorithmMismatch("RS256".into()).to_string(),
            "unexpected signing method: RS256"
        );
        assert_eq!(
            Error::InvalidSegmentCount(2).to_string(),
            "token contains an invalid number of segments: 2"
        );
    }
}
