//! Error type for the cryptographic primitives.

use thiserror::Error;

/// Failure inside a cryptographic primitive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Argon2 parameter construction or key derivation failed.
    #[error("password stretching failed: {0}")]
    Stretch(String),
}
