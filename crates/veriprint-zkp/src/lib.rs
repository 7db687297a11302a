//! # veriprint-zkp — Circuit and Groth16 Pipelines
//!
//! The arithmetic predicate of the authentication core and everything that
//! drives it:
//!
//! - [`circuit`] — the R1CS predicate: commitment integrity, nonce binding,
//!   and the per-coordinate fuzzy-distance bound.
//! - [`gadget`] — the in-circuit MiMC sponge, sharing its round-constant
//!   table with the native sponge in `veriprint-crypto`.
//! - [`setup`] — one-shot circuit compilation and Groth16 key generation,
//!   caching the constraint count and serialized key sizes.
//! - [`prover`] / [`verifier`] — the request-level pipelines.
//! - [`encoding`] — base64 over the canonical compressed encoding.
//!
//! Keys are generated once at process start and shared read-only for the
//! process lifetime; witnesses and proofs are per-request and ephemeral.

pub mod circuit;
pub mod encoding;
pub mod error;
pub mod gadget;
pub mod prover;
pub mod setup;
pub mod verifier;

pub use circuit::{FuzzyMatchCircuit, FEATURE_SIZE, FUZZY_THRESHOLD};
pub use error::ZkpError;
pub use prover::{ProveInput, ProveOutput};
pub use setup::ZkpSystem;
