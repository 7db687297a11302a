//! # veriprint-core — Field Boundary Layer
//!
//! Conversions between the outside world (signed 64-bit coordinates,
//! decimal integer strings, fixed-width byte blobs) and the BN254 scalar
//! field in which all circuit arithmetic lives.
//!
//! Every other crate in the workspace consumes [`ark_bn254::Fr`] values
//! produced here; nothing else parses or formats field elements. Oversized
//! inputs are reduced modulo the field order, never truncated.

pub mod error;
pub mod field;

pub use error::FieldError;
pub use field::{
    fr_from_bytes, fr_from_decimal, fr_from_i64, fr_to_bytes, fr_to_decimal, FIELD_BYTES,
};
