//! The fuzzy-match authentication predicate.
//!
//! Private witnesses: the enrolled features, the candidate features, the
//! stretched password, and the salt. Public inputs, in allocation order:
//! the commitment, the session challenge, and the bound challenge.
//!
//! Three constraint blocks, evaluated over the same witness:
//!
//! 1. **Commitment integrity** — the in-circuit MiMC digest of
//!    `original ‖ password ‖ salt` equals the public commitment.
//! 2. **Nonce binding** — the digest of `commitment ‖ challenge` equals
//!    the public bound challenge, tying the proof to this session.
//! 3. **Fuzzy distance** — each squared coordinate difference is at most
//!    the squared threshold, compared bit-by-bit as natural numbers.

use ark_bn254::Fr;
use ark_ff::{PrimeField, Zero};
use ark_r1cs_std::fields::fp::FpVar;
use ark_r1cs_std::prelude::*;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

use crate::gadget::MimcSpongeVar;

/// Feature-vector length: 30 minutiae × 2 coordinates.
pub const FEATURE_SIZE: usize = 60;

/// Maximum allowed per-coordinate distance between enrolled and candidate
/// features, in pixels.
pub const FUZZY_THRESHOLD: u64 = 3;

/// Full assignment for the predicate. `None` fields are only valid during
/// setup, where assignments are never evaluated.
#[derive(Clone)]
pub struct FuzzyMatchCircuit {
    /// Enrolled feature coordinates (private).
    pub original: Option<[Fr; FEATURE_SIZE]>,
    /// Freshly presented candidate coordinates (private).
    pub current: Option<[Fr; FEATURE_SIZE]>,
    /// Stretched password (private).
    pub password: Option<Fr>,
    /// Salt as a field element (private).
    pub salt: Option<Fr>,
    /// Enrolled commitment (public).
    pub commitment: Option<Fr>,
    /// Verifier-chosen session nonce (public).
    pub challenge: Option<Fr>,
    /// `H(commitment, challenge)` (public).
    pub bound_challenge: Option<Fr>,
}

impl FuzzyMatchCircuit {
    /// An unassigned circuit, used for compilation and key generation.
    pub fn empty() -> Self {
        Self {
            original: None,
            current: None,
            password: None,
            salt: None,
            commitment: None,
            challenge: None,
            bound_challenge: None,
        }
    }
}

impl ConstraintSynthesizer<Fr> for FuzzyMatchCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let original = (0..FEATURE_SIZE)
            .map(|i| {
                FpVar::new_witness(cs.clone(), || {
                    self.original
                        .map(|o| o[i])
                        .ok_or(SynthesisError::AssignmentMissing)
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let current = (0..FEATURE_SIZE)
            .map(|i| {
                FpVar::new_witness(cs.clone(), || {
                    self.current
                        .map(|c| c[i])
                        .ok_or(SynthesisError::AssignmentMissing)
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let password = FpVar::new_witness(cs.clone(), || {
            self.password.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let salt = FpVar::new_witness(cs.clone(), || {
            self.salt.ok_or(SynthesisError::AssignmentMissing)
        })?;

        let commitment = FpVar::new_input(cs.clone(), || {
            self.commitment.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let challenge = FpVar::new_input(cs.clone(), || {
            self.challenge.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let bound_challenge = FpVar::new_input(cs, || {
            self.bound_challenge.ok_or(SynthesisError::AssignmentMissing)
        })?;

        // Block 1: commitment integrity.
        let mut sponge = MimcSpongeVar::new();
        for coord in &original {
            sponge.write(coord);
        }
        sponge.write(&password);
        sponge.write(&salt);
        sponge.sum().enforce_equal(&commitment)?;

        // Block 2: nonce binding.
        sponge.reset();
        sponge.write(&commitment);
        sponge.write(&challenge);
        sponge.sum().enforce_equal(&bound_challenge)?;

        // Block 3: fuzzy distance. The comparison decomposes each squared
        // difference into its canonical bits and bounds the big-endian
        // integer, not the field residue, so a wrapped difference cannot
        // masquerade as small.
        let threshold_sq = Fr::from(FUZZY_THRESHOLD * FUZZY_THRESHOLD);
        for (orig, cand) in original.iter().zip(&current) {
            let diff = orig - cand;
            let dist_sq = &diff * &diff;
            let bits = dist_sq.to_bits_le()?;
            Boolean::enforce_smaller_or_equal_than_le(&bits, threshold_sq.into_bigint())?;
        }

        Ok(())
    }
}

/// Lift raw signed coordinates into a feature array, checking length.
pub(crate) fn lift_features(values: &[i64]) -> Result<[Fr; FEATURE_SIZE], crate::ZkpError> {
    if values.len() != FEATURE_SIZE {
        return Err(crate::ZkpError::InvalidInput(format!(
            "expected {FEATURE_SIZE} feature coordinates, got {}",
            values.len()
        )));
    }
    let mut out = [Fr::zero(); FEATURE_SIZE];
    for (slot, v) in out.iter_mut().zip(values) {
        *slot = veriprint_core::fr_from_i64(*v);
    }
    Ok(out)
}
