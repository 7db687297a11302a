//! Prover pipeline: request inputs to serialized proof.
//!
//! Assembles the full witness from the parsed request, recomputes the
//! commitment and bound challenge off-circuit with the native sponge, and
//! runs Groth16 proving. The witness is checked for satisfiability first;
//! an unsatisfied predicate (candidate out of tolerance, commitment
//! mismatch) is reported as [`ZkpError::ProofRejected`] and no proof is
//! produced.

use ark_bn254::{Bn254, Fr};
use ark_crypto_primitives::snark::SNARK;
use ark_ff::Zero;
use ark_groth16::Groth16;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystem};
use rand::rngs::OsRng;

use veriprint_core::{fr_from_decimal, fr_to_decimal};
use veriprint_crypto::mimc::MimcSponge;
use veriprint_crypto::stretch_password;

use crate::circuit::{lift_features, FuzzyMatchCircuit};
use crate::encoding::to_base64;
use crate::error::ZkpError;
use crate::setup::ZkpSystem;

/// Parsed prove request.
#[derive(Debug, Clone)]
pub struct ProveInput {
    /// Enrolled feature coordinates; must have exactly `FEATURE_SIZE` entries.
    pub secret: Vec<i64>,
    /// Candidate coordinates; empty or absent defaults to `secret`.
    pub candidate: Option<Vec<i64>>,
    /// UTF-8 password.
    pub password: String,
    /// Salt, as the decimal string presented on the wire.
    pub salt: String,
    /// Session nonce as a decimal string; empty or absent means zero.
    pub challenge: Option<String>,
}

/// Serialized proving artifacts.
#[derive(Debug, Clone)]
pub struct ProveOutput {
    /// Base64 of the compressed Groth16 proof.
    pub proof: String,
    /// Base64 of the compressed public-input vector.
    pub public_witness: String,
    /// The commitment as a decimal string.
    pub commitment: String,
}

impl ZkpSystem {
    /// Run the full proving pipeline.
    pub fn prove(&self, input: &ProveInput) -> Result<ProveOutput, ZkpError> {
        let secret = lift_features(&input.secret)?;
        let current = match input.candidate.as_deref() {
            Some(candidate) if !candidate.is_empty() => lift_features(candidate)?,
            _ => secret,
        };

        let salt = fr_from_decimal(&input.salt)?;
        let password = stretch_password(&input.password, &input.salt)?;

        let challenge = match input.challenge.as_deref() {
            None | Some("") => {
                tracing::debug!("no challenge supplied, binding to the zero nonce");
                Fr::zero()
            }
            Some(s) => fr_from_decimal(s)?,
        };

        let mut sponge = MimcSponge::new();
        for coord in &secret {
            sponge.write(*coord);
        }
        sponge.write(password);
        sponge.write(salt);
        let commitment = sponge.sum();

        sponge.reset();
        sponge.write(commitment);
        sponge.write(challenge);
        let bound_challenge = sponge.sum();

        let circuit = FuzzyMatchCircuit {
            original: Some(secret),
            current: Some(current),
            password: Some(password),
            salt: Some(salt),
            commitment: Some(commitment),
            challenge: Some(challenge),
            bound_challenge: Some(bound_challenge),
        };

        // Groth16 proving does not itself reject an unsatisfied witness, so
        // satisfiability is checked up front and failure surfaces as a
        // rejection rather than a garbage proof.
        let cs = ConstraintSystem::<Fr>::new_ref();
        circuit
            .clone()
            .generate_constraints(cs.clone())
            .map_err(|err| ZkpError::Witness(err.to_string()))?;
        if !cs
            .is_satisfied()
            .map_err(|err| ZkpError::Witness(err.to_string()))?
        {
            return Err(ZkpError::ProofRejected);
        }

        let mut rng = OsRng;
        let proof = Groth16::<Bn254>::prove(&self.pk, circuit, &mut rng)
            .map_err(|err| ZkpError::Internal(format!("proof generation failed: {err}")))?;

        let public_witness = vec![commitment, challenge, bound_challenge];

        Ok(ProveOutput {
            proof: to_base64(&proof)?,
            public_witness: to_base64(&public_witness)?,
            commitment: fr_to_decimal(&commitment),
        })
    }
}
