//! Argon2id password stretching.
//!
//! Derives the circuit's private password input from `(password, salt)`.
//! The salt enters here as the *string* presented on the wire; the same
//! string is independently parsed as a decimal integer for the circuit's
//! salt input. The two byte sequences differ, and both roles are part of
//! the commitment's definition.

use argon2::{Algorithm, Argon2, Params, Version};
use ark_bn254::Fr;

use veriprint_core::fr_from_bytes;

use crate::error::CryptoError;

/// Argon2id time cost (passes).
pub const ARGON2_TIME_COST: u32 = 1;
/// Argon2id memory cost in KiB (64 MiB).
pub const ARGON2_MEMORY_KIB: u32 = 64 * 1024;
/// Argon2id lane count.
pub const ARGON2_PARALLELISM: u32 = 4;
/// Derived key length in bytes.
pub const STRETCHED_LEN: usize = 32;

/// The argon2 crate enforces the RFC 9106 8-byte salt minimum; shorter
/// wire salts are zero-padded on the right before derivation.
const MIN_SALT_LEN: usize = 8;

/// Stretch a password into a field element.
///
/// The 32-byte Argon2id output is interpreted as a big-endian integer and
/// reduced modulo the field order.
pub fn stretch_password(password: &str, salt: &str) -> Result<Fr, CryptoError> {
    let params = Params::new(
        ARGON2_MEMORY_KIB,
        ARGON2_TIME_COST,
        ARGON2_PARALLELISM,
        Some(STRETCHED_LEN),
    )
    .map_err(|err| CryptoError::Stretch(format!("invalid argon2 parameters: {err}")))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut salt_bytes = salt.as_bytes().to_vec();
    if salt_bytes.len() < MIN_SALT_LEN {
        salt_bytes.resize(MIN_SALT_LEN, 0);
    }

    let mut out = [0u8; STRETCHED_LEN];
    argon2
        .hash_password_into(password.as_bytes(), &salt_bytes, &mut out)
        .map_err(|err| CryptoError::Stretch(format!("argon2 derivation failed: {err}")))?;

    Ok(fr_from_bytes(&out))
}
