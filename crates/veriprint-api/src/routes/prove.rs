//! # Prove Route
//!
//! `POST /prove` — assemble a witness from the client's secrets, run
//! Groth16 proving, and return the serialized proof alongside the
//! commitment and the cached setup metrics.
//!
//! Proving is CPU-bound (and Argon2id alone touches 64 MiB), so the
//! pipeline runs on the blocking thread pool rather than the async
//! executor.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use veriprint_zkp::ProveInput;

use crate::error::AppError;
use crate::state::AppState;

/// Build the prove router.
pub fn router() -> Router<AppState> {
    Router::new().route("/prove", post(prove))
}

/// Request to generate an authentication proof.
#[derive(Debug, Deserialize)]
pub struct ProveRequest {
    /// Enrolled feature coordinates (exactly `FEATURE_SIZE` entries).
    pub secret: Vec<i64>,
    /// Candidate coordinates; empty or omitted defaults to `secret`.
    #[serde(default)]
    pub candidate: Option<Vec<i64>>,
    /// Password, UTF-8.
    pub password: String,
    /// Salt as a decimal integer string.
    pub salt: String,
    /// Session nonce as a decimal integer string; empty or omitted means
    /// zero (which collapses nonce binding for this call).
    #[serde(default)]
    pub challenge: Option<String>,
}

/// Serialized proof plus setup metrics.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProveResponse {
    /// Base64 of the compressed proof.
    pub proof: String,
    /// Base64 of the compressed public-input vector.
    pub public_witness: String,
    /// The commitment as a decimal string.
    pub commitment: String,
    /// Constraint count of the compiled circuit.
    pub nb_constraints: usize,
    /// Compressed proving-key size.
    pub pk_size_bytes: usize,
    /// Compressed verifying-key size.
    pub vk_size_bytes: usize,
}

async fn prove(
    State(state): State<AppState>,
    payload: Result<Json<ProveRequest>, JsonRejection>,
) -> Result<Json<ProveResponse>, AppError> {
    let Json(req) = payload.map_err(|err| AppError::BadRequest(err.to_string()))?;

    let input = ProveInput {
        secret: req.secret,
        candidate: req.candidate,
        password: req.password,
        salt: req.salt,
        challenge: req.challenge,
    };

    let zkp = state.zkp.clone();
    let output = tokio::task::spawn_blocking(move || zkp.prove(&input))
        .await
        .map_err(|err| AppError::Internal(format!("prove task failed: {err}")))??;

    Ok(Json(ProveResponse {
        proof: output.proof,
        public_witness: output.public_witness,
        commitment: output.commitment,
        nb_constraints: state.zkp.nb_constraints(),
        pk_size_bytes: state.zkp.pk_size_bytes(),
        vk_size_bytes: state.zkp.vk_size_bytes(),
    }))
}
