//! # veriprint-crypto — Hashing and Password Stretching
//!
//! The two cryptographic primitives of the authentication core:
//!
//! - **MiMC sponge** over the BN254 scalar field. The same permutation is
//!   evaluated inside the circuit (see `veriprint-zkp`); the two
//!   implementations share the round-constant table in [`constants`] and
//!   must produce identical digests for identical input sequences.
//! - **Argon2id password stretcher** deriving the circuit's private
//!   password input from `(password, salt)`. Memory-hard, so the password
//!   resists offline brute force even if the commitment leaks.

pub mod constants;
pub mod error;
pub mod mimc;
pub mod stretch;

pub use error::CryptoError;
pub use mimc::{mimc_hash, MimcSponge};
pub use stretch::stretch_password;
