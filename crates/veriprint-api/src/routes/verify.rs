//! # Verify Route
//!
//! `POST /verify` — recompute the bound challenge from the trusted
//! `(commitment, challenge)` pair and check the proof against it. A
//! cryptographic mismatch is an expected operational outcome and returns
//! 200 with `valid: false`; only malformed inputs are 400.

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

/// Build the verify router.
pub fn router() -> Router<AppState> {
    Router::new().route("/verify", post(verify))
}

/// Request to verify an authentication proof.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    /// Base64 of the compressed proof.
    pub proof: String,
    /// Enrolled commitment as a decimal string (trusted, server-side).
    pub commitment: String,
    /// Session nonce as a decimal string.
    pub challenge: String,
}

/// Verification verdict.
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

async fn verify(
    State(state): State<AppState>,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerifyResponse>, AppError> {
    let Json(req) = payload.map_err(|err| AppError::BadRequest(err.to_string()))?;

    let start = Instant::now();
    let zkp = state.zkp.clone();
    let valid = tokio::task::spawn_blocking(move || {
        zkp.verify(&req.proof, &req.commitment, &req.challenge)
    })
    .await
    .map_err(|err| AppError::Internal(format!("verify task failed: {err}")))??;

    tracing::info!(valid, elapsed = ?start.elapsed(), "verification completed");

    Ok(Json(VerifyResponse { valid }))
}
