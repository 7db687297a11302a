//! BN254 scalar-field conversions.
//!
//! Field elements cross the wire as decimal integer strings (JSON cannot
//! carry 254-bit integers) and cross the hashing boundary as fixed-width
//! big-endian byte strings. Both directions are centralized here so that
//! reduction modulo the field order happens in exactly one place.

use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;

use crate::error::FieldError;

/// Serialized width of a BN254 scalar: ceil(254 / 8) rounded to the limb
/// boundary, i.e. 32 bytes.
pub const FIELD_BYTES: usize = 32;

/// Lift a signed 64-bit coordinate into the field.
///
/// Negative values wrap to `p + x`; the circuit treats coordinates as
/// field elements without sign.
pub fn fr_from_i64(value: i64) -> Fr {
    Fr::from(value)
}

/// Parse a non-negative decimal integer string into a field element,
/// reducing modulo the field order when the value exceeds it.
pub fn fr_from_decimal(s: &str) -> Result<Fr, FieldError> {
    let n = BigUint::parse_bytes(s.as_bytes(), 10)
        .ok_or_else(|| FieldError::InvalidDecimal(s.to_string()))?;
    Ok(Fr::from_be_bytes_mod_order(&n.to_bytes_be()))
}

/// Canonical decimal rendering of a field element's residue.
pub fn fr_to_decimal(f: &Fr) -> String {
    BigUint::from(f.into_bigint()).to_str_radix(10)
}

/// Fixed-width big-endian encoding of a field element.
pub fn fr_to_bytes(f: &Fr) -> [u8; FIELD_BYTES] {
    let be = f.into_bigint().to_bytes_be();
    let mut out = [0u8; FIELD_BYTES];
    out[FIELD_BYTES - be.len()..].copy_from_slice(&be);
    out
}

/// Interpret bytes as a big-endian integer and reduce modulo the field
/// order. Required when ingesting 32-byte digests (e.g. the Argon2 output)
/// that may exceed the modulus.
pub fn fr_from_bytes(bytes: &[u8]) -> Fr {
    Fr::from_be_bytes_mod_order(bytes)
}
