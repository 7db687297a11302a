//! One-shot circuit compilation and Groth16 key generation.
//!
//! A [`ZkpSystem`] is built synchronously at process start, before any
//! request is served, and shared read-only (behind an `Arc`) for the
//! process lifetime. No keys are persisted or loaded; deployments that
//! need a common reference string across instances would load a shared
//! `(pk, vk)` here instead.

use ark_bn254::{Bn254, Fr};
use ark_crypto_primitives::snark::{CircuitSpecificSetupSNARK, SNARK};
use ark_groth16::{Groth16, PreparedVerifyingKey, ProvingKey, VerifyingKey};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystem, SynthesisMode};
use ark_serialize::CanonicalSerialize;
use rand::rngs::OsRng;

use crate::circuit::FuzzyMatchCircuit;
use crate::error::ZkpError;

/// Immutable proving context: keys plus the metrics cached at setup time.
pub struct ZkpSystem {
    pub(crate) pk: ProvingKey<Bn254>,
    pub(crate) vk: VerifyingKey<Bn254>,
    pub(crate) pvk: PreparedVerifyingKey<Bn254>,
    nb_constraints: usize,
    pk_size_bytes: usize,
    vk_size_bytes: usize,
}

impl ZkpSystem {
    /// Compile the circuit and run the Groth16 setup.
    ///
    /// Failure here is fatal to the process; callers abort before opening
    /// the listener.
    pub fn setup() -> Result<Self, ZkpError> {
        tracing::info!("compiling fuzzy-match circuit and generating Groth16 keys");

        let cs = ConstraintSystem::<Fr>::new_ref();
        cs.set_mode(SynthesisMode::Setup);
        FuzzyMatchCircuit::empty()
            .generate_constraints(cs.clone())
            .map_err(|err| ZkpError::Setup(format!("circuit compilation failed: {err}")))?;
        cs.finalize();
        let nb_constraints = cs.num_constraints();

        let mut rng = OsRng;
        let (pk, vk) = Groth16::<Bn254>::setup(FuzzyMatchCircuit::empty(), &mut rng)
            .map_err(|err| ZkpError::Setup(format!("key generation failed: {err}")))?;
        let pvk = Groth16::<Bn254>::process_vk(&vk)
            .map_err(|err| ZkpError::Setup(format!("verifying-key processing failed: {err}")))?;

        let pk_size_bytes = pk.compressed_size();
        let vk_size_bytes = vk.compressed_size();

        tracing::info!(
            nb_constraints,
            pk_size_bytes,
            vk_size_bytes,
            "Groth16 keys generated"
        );

        Ok(Self {
            pk,
            vk,
            pvk,
            nb_constraints,
            pk_size_bytes,
            vk_size_bytes,
        })
    }

    /// The verifying key, for deployments that distribute it to external
    /// verifiers or share a common reference string across instances.
    pub fn verifying_key(&self) -> &VerifyingKey<Bn254> {
        &self.vk
    }

    /// Number of R1CS constraints in the compiled circuit.
    pub fn nb_constraints(&self) -> usize {
        self.nb_constraints
    }

    /// Compressed serialized size of the proving key.
    pub fn pk_size_bytes(&self) -> usize {
        self.pk_size_bytes
    }

    /// Compressed serialized size of the verifying key.
    pub fn vk_size_bytes(&self) -> usize {
        self.vk_size_bytes
    }
}
