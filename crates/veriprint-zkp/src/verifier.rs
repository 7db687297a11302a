//! Verifier pipeline: serialized proof to verdict.
//!
//! The bound challenge is recomputed server-side from the trusted
//! commitment and challenge; nothing client-supplied stands in for it.
//! Malformed inputs are errors, a cryptographic mismatch is an ordinary
//! `false` verdict.

use ark_bn254::{Bn254, Fr};
use ark_crypto_primitives::snark::SNARK;
use ark_ff::Zero;
use ark_groth16::{Groth16, Proof};

use veriprint_core::fr_from_decimal;
use veriprint_crypto::mimc::mimc_hash;

use crate::encoding::from_base64;
use crate::error::ZkpError;
use crate::setup::ZkpSystem;

impl ZkpSystem {
    /// Verify a proof against a trusted `(commitment, challenge)` pair.
    ///
    /// Returns `Ok(false)` on cryptographic mismatch; `Err` only for
    /// malformed inputs.
    pub fn verify(
        &self,
        proof: &str,
        commitment: &str,
        challenge: &str,
    ) -> Result<bool, ZkpError> {
        let proof: Proof<Bn254> = from_base64(proof)?;
        let commitment = fr_from_decimal(commitment)?;
        let challenge = if challenge.is_empty() {
            Fr::zero()
        } else {
            fr_from_decimal(challenge)?
        };

        let bound_challenge = mimc_hash(&[commitment, challenge]);
        let public_inputs = [commitment, challenge, bound_challenge];

        match Groth16::<Bn254>::verify_with_processed_vk(&self.pvk, &public_inputs, &proof) {
            Ok(valid) => Ok(valid),
            Err(err) => {
                tracing::debug!(error = %err, "verification errored, treating as invalid");
                Ok(false)
            }
        }
    }
}
