//! Error type for the proving and verification pipelines.

use thiserror::Error;
use veriprint_core::FieldError;
use veriprint_crypto::CryptoError;

/// Failure in the ZKP layer. The API layer maps these onto HTTP status
/// codes; see `veriprint-api`.
#[derive(Error, Debug)]
pub enum ZkpError {
    /// The request carried unparsable or ill-sized inputs.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Witness synthesis failed before satisfiability was ever evaluated.
    #[error("witness assembly failed: {0}")]
    Witness(String),

    /// The assembled witness does not satisfy the predicate (candidate out
    /// of tolerance, or commitment mismatch). No proof is produced.
    #[error("predicate not satisfied for the supplied inputs")]
    ProofRejected,

    /// Password stretching failed.
    #[error(transparent)]
    Stretch(#[from] CryptoError),

    /// Canonical serialization of a proof or witness failed.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Circuit compilation or key generation failed. Fatal at startup.
    #[error("setup failed: {0}")]
    Setup(String),

    /// Anything else that should never happen on a well-formed request.
    #[error("internal proving error: {0}")]
    Internal(String),
}

impl From<FieldError> for ZkpError {
    fn from(err: FieldError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
