//! # Application Error
//!
//! Maps pipeline errors to structured HTTP responses. The status mapping
//! follows the authentication protocol: malformed requests are 400, an
//! unsatisfied predicate during proving is 403 (so clients can tell "your
//! inputs don't match" from a server fault), and a cryptographic mismatch
//! during verification is not an error at all — it surfaces as a 200 with
//! `valid: false` in the verify handler, never through this type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use veriprint_zkp::ZkpError;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g. "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type implementing [`IntoResponse`].
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed JSON, missing fields, unparsable numerals, bad proof
    /// bytes (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Proof generation failed because the predicate does not hold for
    /// the supplied inputs (403). No proof is returned.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Internal server error (500). Message is logged but not returned
    /// to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal error messages to clients.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::Forbidden(_) => tracing::info!(error = %self, "proof rejected"),
            Self::BadRequest(_) => tracing::debug!(error = %self, "bad request"),
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ZkpError> for AppError {
    fn from(err: ZkpError) -> Self {
        match err {
            ZkpError::InvalidInput(msg) => Self::BadRequest(msg),
            ZkpError::ProofRejected => Self::Forbidden("proof generation failed".to_string()),
            ZkpError::Witness(msg) => Self::Internal(format!("witness assembly failed: {msg}")),
            ZkpError::Stretch(err) => Self::Internal(err.to_string()),
            ZkpError::Serialization(msg)
            | ZkpError::Setup(msg)
            | ZkpError::Internal(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let (status, code) = AppError::BadRequest("x".into()).status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "BAD_REQUEST");
    }

    #[test]
    fn forbidden_maps_to_403() {
        let (status, code) = AppError::Forbidden("x".into()).status_and_code();
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(code, "FORBIDDEN");
    }

    #[test]
    fn internal_maps_to_500() {
        let (status, code) = AppError::Internal("x".into()).status_and_code();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "INTERNAL_ERROR");
    }

    #[test]
    fn invalid_input_converts_to_bad_request() {
        let err = AppError::from(ZkpError::InvalidInput("bad salt".into()));
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn proof_rejection_converts_to_forbidden() {
        let err = AppError::from(ZkpError::ProofRejected);
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn witness_failure_converts_to_internal() {
        let err = AppError::from(ZkpError::Witness("mismatch".into()));
        assert!(matches!(err, AppError::Internal(_)));
    }
}
