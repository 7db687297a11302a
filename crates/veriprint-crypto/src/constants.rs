//! MiMC round-constant table.
//!
//! Constants are derived from a chained Keccak-256 stream over a fixed
//! ASCII seed, each 32-byte output reduced big-endian into the scalar
//! field. The table is computed once per process and shared by the native
//! sponge and the in-circuit gadget, which keeps the two evaluations in
//! lockstep by construction.

use std::sync::OnceLock;

use ark_bn254::Fr;
use ark_ff::{PrimeField, Zero};
use sha3::{Digest, Keccak256};

/// Number of rounds of the exponent-5 MiMC permutation over BN254.
pub const MIMC_ROUNDS: usize = 110;

/// Domain separator seeding the round-constant stream.
const MIMC_SEED: &[u8] = b"veriprint.mimc.bn254";

static ROUND_CONSTANTS: OnceLock<[Fr; MIMC_ROUNDS]> = OnceLock::new();

/// The shared round-constant table.
pub fn round_constants() -> &'static [Fr; MIMC_ROUNDS] {
    ROUND_CONSTANTS.get_or_init(|| {
        let mut constants = [Fr::zero(); MIMC_ROUNDS];
        let mut digest = Keccak256::digest(MIMC_SEED);
        for c in constants.iter_mut() {
            *c = Fr::from_be_bytes_mod_order(&digest);
            digest = Keccak256::digest(digest);
        }
        constants
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_expected_length() {
        assert_eq!(round_constants().len(), MIMC_ROUNDS);
    }

    #[test]
    fn constants_are_stable() {
        assert_eq!(round_constants(), round_constants());
    }

    #[test]
    fn constants_are_distinct_and_nonzero() {
        let table = round_constants();
        assert!(table.iter().all(|c| !c.is_zero()));
        for (i, a) in table.iter().enumerate() {
            for b in table.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
