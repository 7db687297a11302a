//! End-to-end prove/verify tests against a single shared key setup.
//!
//! Groth16 setup for this circuit takes a noticeable amount of time, so
//! every test borrows the same once-initialized [`ZkpSystem`].

use std::sync::OnceLock;

use ark_bn254::{Bn254, Fr};
use ark_groth16::Proof;

use veriprint_zkp::encoding::{from_base64, to_base64};
use veriprint_zkp::{ProveInput, ZkpError, ZkpSystem, FEATURE_SIZE, FUZZY_THRESHOLD};

static SYSTEM: OnceLock<ZkpSystem> = OnceLock::new();

fn system() -> &'static ZkpSystem {
    SYSTEM.get_or_init(|| ZkpSystem::setup().expect("Groth16 setup"))
}

fn base_input() -> ProveInput {
    ProveInput {
        secret: (1..=FEATURE_SIZE as i64).collect(),
        candidate: None,
        password: "correct horse battery staple".to_string(),
        salt: "12345".to_string(),
        challenge: Some("99999".to_string()),
    }
}

#[test]
fn prove_then_verify_roundtrip() {
    let zkp = system();
    let out = zkp.prove(&base_input()).unwrap();
    assert!(zkp.verify(&out.proof, &out.commitment, "99999").unwrap());
}

#[test]
fn replayed_proof_fails_on_new_challenge() {
    let zkp = system();
    let out = zkp.prove(&base_input()).unwrap();
    assert!(!zkp.verify(&out.proof, &out.commitment, "88888").unwrap());
}

#[test]
fn proof_fails_against_foreign_commitment() {
    let zkp = system();
    let out = zkp.prove(&base_input()).unwrap();
    let mut other = base_input();
    other.password = "a different password".to_string();
    let foreign = zkp.prove(&other).unwrap();
    assert_ne!(out.commitment, foreign.commitment);
    assert!(!zkp.verify(&out.proof, &foreign.commitment, "99999").unwrap());
}

#[test]
fn candidate_within_tolerance_proves() {
    let zkp = system();
    let mut input = base_input();
    input.secret = vec![0; FEATURE_SIZE];
    input.candidate = Some(vec![FUZZY_THRESHOLD as i64; FEATURE_SIZE]);
    let out = zkp.prove(&input).unwrap();
    assert!(zkp.verify(&out.proof, &out.commitment, "99999").unwrap());
}

#[test]
fn candidate_out_of_tolerance_is_rejected() {
    let zkp = system();
    let mut input = base_input();
    input.secret = vec![0; FEATURE_SIZE];
    let mut candidate = vec![0i64; FEATURE_SIZE];
    candidate[FEATURE_SIZE - 1] = FUZZY_THRESHOLD as i64 + 1;
    input.candidate = Some(candidate);
    assert!(matches!(zkp.prove(&input), Err(ZkpError::ProofRejected)));
}

#[test]
fn negative_coordinates_within_tolerance_prove() {
    let zkp = system();
    let mut input = base_input();
    input.secret = vec![-5; FEATURE_SIZE];
    input.candidate = Some(vec![-2; FEATURE_SIZE]);
    let out = zkp.prove(&input).unwrap();
    assert!(zkp.verify(&out.proof, &out.commitment, "99999").unwrap());
}

#[test]
fn negative_coordinates_beyond_tolerance_are_rejected() {
    let zkp = system();
    let mut input = base_input();
    input.secret = vec![-5; FEATURE_SIZE];
    let mut candidate = vec![-5i64; FEATURE_SIZE];
    candidate[0] = -9;
    input.candidate = Some(candidate);
    assert!(matches!(zkp.prove(&input), Err(ZkpError::ProofRejected)));
}

#[test]
fn wrapped_difference_is_rejected() {
    // original - current wraps far past the threshold; the natural-number
    // comparison must reject it even though the arithmetic is modular.
    let zkp = system();
    let mut input = base_input();
    input.secret = vec![0; FEATURE_SIZE];
    let mut candidate = vec![0i64; FEATURE_SIZE];
    candidate[0] = i64::MAX;
    input.candidate = Some(candidate);
    assert!(matches!(zkp.prove(&input), Err(ZkpError::ProofRejected)));
}

#[test]
fn commitment_is_deterministic_across_proofs() {
    let zkp = system();
    let first = zkp.prove(&base_input()).unwrap();
    let second = zkp.prove(&base_input()).unwrap();
    assert_eq!(first.commitment, second.commitment);
    // Proof bytes are randomized; both must still verify.
    assert!(zkp.verify(&first.proof, &first.commitment, "99999").unwrap());
    assert!(zkp.verify(&second.proof, &second.commitment, "99999").unwrap());
}

#[test]
fn missing_challenge_defaults_to_zero() {
    let zkp = system();
    let mut input = base_input();
    input.challenge = None;
    let out = zkp.prove(&input).unwrap();
    assert!(zkp.verify(&out.proof, &out.commitment, "").unwrap());
    assert!(zkp.verify(&out.proof, &out.commitment, "0").unwrap());
    assert!(!zkp.verify(&out.proof, &out.commitment, "1").unwrap());
}

#[test]
fn proof_serialization_roundtrips() {
    let zkp = system();
    let out = zkp.prove(&base_input()).unwrap();
    let proof: Proof<Bn254> = from_base64(&out.proof).unwrap();
    assert_eq!(to_base64(&proof).unwrap(), out.proof);
    let public: Vec<Fr> = from_base64(&out.public_witness).unwrap();
    assert_eq!(public.len(), 3);
    assert_eq!(to_base64(&public).unwrap(), out.public_witness);
}

#[test]
fn public_witness_carries_commitment_challenge_binding() {
    let zkp = system();
    let out = zkp.prove(&base_input()).unwrap();
    let public: Vec<Fr> = from_base64(&out.public_witness).unwrap();
    assert_eq!(veriprint_core::fr_to_decimal(&public[0]), out.commitment);
    assert_eq!(public[1], Fr::from(99999u64));
    assert_eq!(
        public[2],
        veriprint_crypto::mimc_hash(&[public[0], public[1]])
    );
}

#[test]
fn wrong_length_secret_is_invalid_input() {
    let zkp = system();
    let mut input = base_input();
    input.secret = vec![1, 2, 3];
    assert!(matches!(zkp.prove(&input), Err(ZkpError::InvalidInput(_))));
}

#[test]
fn malformed_salt_is_invalid_input() {
    let zkp = system();
    let mut input = base_input();
    input.salt = "not a number".to_string();
    assert!(matches!(zkp.prove(&input), Err(ZkpError::InvalidInput(_))));
}

#[test]
fn malformed_proof_is_invalid_input() {
    let zkp = system();
    assert!(matches!(
        zkp.verify("%%%", "1", "2"),
        Err(ZkpError::InvalidInput(_))
    ));
    assert!(matches!(
        zkp.verify("AAAA", "1", "2"),
        Err(ZkpError::InvalidInput(_))
    ));
}

#[test]
fn setup_metrics_are_cached_and_plausible() {
    let zkp = system();
    assert!(zkp.nb_constraints() > 0);
    assert!(zkp.pk_size_bytes() > zkp.vk_size_bytes());
    assert!(zkp.vk_size_bytes() > 0);
}
