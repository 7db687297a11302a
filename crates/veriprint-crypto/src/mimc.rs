//! Native MiMC sponge over the BN254 scalar field.
//!
//! Miyaguchi–Preneel construction around the exponent-5 MiMC permutation:
//! absorbing a block `x` into state `h` computes `h' = E_h(x) + h + x`,
//! where `E_k` runs [`MIMC_ROUNDS`](crate::constants::MIMC_ROUNDS) rounds
//! of `m ← (m + k + c_i)^5` followed by a final key addition. The digest
//! is the state itself, one field element.
//!
//! Inputs are absorbed in call order; order is significant. The in-circuit
//! gadget in `veriprint-zkp` evaluates the same schedule over circuit
//! variables and must agree digest-for-digest with this implementation.

use ark_bn254::Fr;
use ark_ff::{Field, Zero};

use crate::constants::round_constants;

/// Stateful MiMC absorber. [`reset`](MimcSponge::reset) reinitializes the
/// state; a fresh instance and a reset instance are interchangeable.
#[derive(Debug, Clone)]
pub struct MimcSponge {
    state: Fr,
}

impl Default for MimcSponge {
    fn default() -> Self {
        Self::new()
    }
}

impl MimcSponge {
    /// A sponge with zeroed state.
    pub fn new() -> Self {
        Self { state: Fr::zero() }
    }

    /// Absorb one field element.
    pub fn write(&mut self, block: Fr) {
        self.state = encrypt(self.state, block) + self.state + block;
    }

    /// Current digest. Does not consume the state; further writes continue
    /// absorbing on top of it.
    pub fn sum(&self) -> Fr {
        self.state
    }

    /// Reinitialize the state, as if freshly constructed.
    pub fn reset(&mut self) {
        self.state = Fr::zero();
    }
}

/// Keyed MiMC permutation: exponent-5 rounds plus the final key addition.
fn encrypt(key: Fr, mut m: Fr) -> Fr {
    for c in round_constants() {
        let t = m + key + c;
        m = t.square().square() * t;
    }
    m + key
}

/// One-shot digest of an input sequence.
pub fn mimc_hash(inputs: &[Fr]) -> Fr {
    let mut sponge = MimcSponge::new();
    for x in inputs {
        sponge.write(*x);
    }
    sponge.sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic() {
        let inputs = [Fr::from(1u64), Fr::from(2u64), Fr::from(3u64)];
        assert_eq!(mimc_hash(&inputs), mimc_hash(&inputs));
    }

    #[test]
    fn digest_depends_on_order() {
        let a = mimc_hash(&[Fr::from(1u64), Fr::from(2u64)]);
        let b = mimc_hash(&[Fr::from(2u64), Fr::from(1u64)]);
        assert_ne!(a, b);
    }

    #[test]
    fn digest_depends_on_every_input() {
        let base = mimc_hash(&[Fr::from(5u64), Fr::from(6u64), Fr::from(7u64)]);
        let tweaked = mimc_hash(&[Fr::from(5u64), Fr::from(6u64), Fr::from(8u64)]);
        assert_ne!(base, tweaked);
    }

    #[test]
    fn reset_matches_fresh_sponge() {
        let mut reused = MimcSponge::new();
        reused.write(Fr::from(11u64));
        reused.write(Fr::from(22u64));
        let first = reused.sum();
        reused.reset();
        reused.write(Fr::from(33u64));

        let mut fresh = MimcSponge::new();
        fresh.write(Fr::from(33u64));

        assert_eq!(reused.sum(), fresh.sum());
        assert_ne!(first, reused.sum());
    }

    #[test]
    fn single_block_differs_from_zero_state() {
        // Absorbing zero still permutes the state.
        assert_ne!(mimc_hash(&[Fr::zero()]), Fr::zero());
    }

    #[test]
    fn incremental_writes_match_one_shot() {
        let inputs: Vec<Fr> = (0..10u64).map(Fr::from).collect();
        let mut sponge = MimcSponge::new();
        for x in &inputs {
            sponge.write(*x);
        }
        assert_eq!(sponge.sum(), mimc_hash(&inputs));
    }
}
