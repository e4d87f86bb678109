//! End-to-end range proof scenarios

use bulletproofs_core::{
    verify_commitment_opening, BulletproofsError, GroupElement, GroupParameters, Scalar,
};
use rand::thread_rng;
use rand_core::{CryptoRng, Error, RngCore};
use range::{MultiRangeProof, RangeProver, RangeVerifier};
use std::num::NonZeroU32;

/// An entropy source that always fails
struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), Error> {
        Err(Error::from(NonZeroU32::new(Error::CUSTOM_START).unwrap()))
    }
}

impl CryptoRng for FailingRng {}

fn setup() -> (RangeProver, RangeVerifier) {
    let params = GroupParameters::for_aggregation(8).unwrap();
    (RangeProver::new(params.clone()), RangeVerifier::new(params))
}

#[test]
fn single_value_proof_verifies() {
    let (prover, verifier) = setup();
    let proof = prover.prove_range(&[0x5000000000], &mut thread_rng()).unwrap();

    assert_eq!(proof.aggregation_size(), 1);
    assert!(verifier.verify_range(&proof));
}

#[test]
fn four_value_proof_verifies() {
    let (prover, verifier) = setup();
    let proof = prover.prove_range(&[5, 10, 15, 20], &mut thread_rng()).unwrap();

    assert_eq!(proof.aggregation_size(), 4);
    assert!(verifier.verify_range(&proof));
}

#[test]
fn range_boundaries_verify() {
    let (prover, verifier) = setup();
    let mut rng = thread_rng();

    for value in [0u64, u64::MAX] {
        let proof = prover.prove_range(&[value], &mut rng).unwrap();
        assert!(verifier.verify_range(&proof), "value {}", value);
    }

    let proof = prover
        .prove_range_checked(&[0, u64::MAX as i128], &mut rng)
        .unwrap();
    assert!(verifier.verify_range(&proof));
}

#[test]
fn out_of_range_values_rejected() {
    let (prover, _) = setup();

    for value in [-1i128, 0x10000000000000000, i128::MIN, i128::MAX] {
        assert_eq!(
            prover.prove_range_checked(&[value], &mut thread_rng()),
            Err(BulletproofsError::ValueOutOfRange(value))
        );
    }

    // Rejected before any randomness is drawn
    assert_eq!(
        prover.prove_range_checked(&[3, -1], &mut FailingRng),
        Err(BulletproofsError::ValueOutOfRange(-1))
    );
}

#[test]
fn unsupported_aggregate_counts_rejected() {
    let (prover, _) = setup();

    for m in [0usize, 3, 5, 16] {
        let values = vec![1u64; m];
        assert_eq!(
            prover.prove_range(&values, &mut thread_rng()),
            Err(BulletproofsError::UnsupportedAggregateCount(m))
        );
    }
}

#[test]
fn supported_aggregate_counts_verify() {
    let (prover, verifier) = setup();
    let mut rng = thread_rng();

    for m in [1usize, 2, 4, 8] {
        let values: Vec<u64> = (0..m as u64).map(|j| j * 1_000_003).collect();
        let proof = prover.prove_range(&values, &mut rng).unwrap();
        assert!(verifier.verify_range(&proof), "m = {}", m);
    }
}

#[test]
fn randomness_failure_aborts_proving() {
    let (prover, _) = setup();

    assert!(matches!(
        prover.prove_range(&[42], &mut FailingRng),
        Err(BulletproofsError::RandomnessFailure(_))
    ));
    assert!(matches!(
        prover.prove_range_with_blindings(&[42], &[Scalar::ONE], &mut FailingRng),
        Err(BulletproofsError::RandomnessFailure(_))
    ));
}

#[test]
fn tampered_fields_rejected() {
    let (prover, verifier) = setup();
    let proof = prover.prove_range(&[5, 10], &mut thread_rng()).unwrap();
    let other = prover.prove_range(&[5, 10], &mut thread_rng()).unwrap();

    let tampers: [(&str, fn(&mut MultiRangeProof, &MultiRangeProof)); 17] = [
        ("V", |p, o| p.commitments[1] = o.commitments[1]),
        ("A", |p, o| p.a = o.a),
        ("S", |p, o| p.s = o.s),
        ("T1", |p, o| p.t1 = o.t1),
        ("T2", |p, o| p.t2 = o.t2),
        ("tau", |p, _| p.tau += Scalar::ONE),
        ("th", |p, _| p.th += Scalar::ONE),
        ("mu", |p, _| p.mu += Scalar::ONE),
        ("cy", |p, _| p.cy += Scalar::ONE),
        ("cz", |p, _| p.cz += Scalar::ONE),
        ("cx", |p, _| p.cx += Scalar::ONE),
        ("ipp.a", |p, _| p.ipp.a += Scalar::ONE),
        ("ipp.b", |p, _| p.ipp.b += Scalar::ONE),
        ("ipp.L", |p, o| p.ipp.l_vec[0] = o.ipp.l_vec[0]),
        ("ipp.R", |p, o| p.ipp.r_vec[3] = o.ipp.r_vec[3]),
        ("ipp.challenge", |p, _| p.ipp.challenges[2] += Scalar::ONE),
        ("ipp.rounds", |p, _| {
            p.ipp.l_vec.pop();
            p.ipp.r_vec.pop();
            p.ipp.challenges.remove(0);
        }),
    ];

    for (field, tamper) in tampers {
        let mut tampered = proof.clone();
        tamper(&mut tampered, &other);
        assert!(!verifier.verify_range(&tampered), "tampered {}", field);
    }
}

#[test]
fn invalid_point_encoding_rejected() {
    let (prover, verifier) = setup();
    let mut proof = prover.prove_range(&[77], &mut thread_rng()).unwrap();

    // All-ones is not a valid Ristretto encoding
    proof.a.0 = [0xff; 32];
    assert!(!verifier.verify_range(&proof));
}

#[test]
fn proof_bytes_round_trip() {
    let (prover, verifier) = setup();
    let proof = prover
        .prove_range(&[1, 2, 3, 4, 5, 6, 7, 8], &mut thread_rng())
        .unwrap();

    let bytes = proof.to_bytes();
    assert_eq!(bytes.len(), proof.size_bytes());

    let decoded = MultiRangeProof::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, proof);
    assert!(verifier.verify_range(&decoded));
}

#[test]
fn proof_json_round_trip() {
    let (prover, verifier) = setup();
    let proof = prover.prove_range(&[123456789], &mut thread_rng()).unwrap();

    let json = serde_json::to_string(&proof).unwrap();
    let decoded: MultiRangeProof = serde_json::from_str(&json).unwrap();
    assert!(verifier.verify_range(&decoded));
}

#[test]
fn commitments_open_to_caller_blindings() {
    let (prover, verifier) = setup();
    let values = [500u64, 250];
    let blindings = [Scalar::from(31u64), Scalar::from(37u64)];

    let proof = prover
        .prove_range_with_blindings(&values, &blindings, &mut thread_rng())
        .unwrap();
    assert!(verifier.verify_range(&proof));

    let params = verifier.params();
    let commitments = proof.value_commitments().unwrap();
    assert!(verify_commitment_opening(
        params,
        &commitments[0],
        &Scalar::from(500u64),
        &blindings[0]
    ));
    assert!(!verify_commitment_opening(
        params,
        &commitments[1],
        &Scalar::from(251u64),
        &blindings[1]
    ));

    // Commitments are additively homomorphic
    let sum: GroupElement = commitments[0] + commitments[1];
    assert!(verify_commitment_opening(
        params,
        &sum,
        &Scalar::from(750u64),
        &(blindings[0] + blindings[1])
    ));
}

#[test]
fn mismatched_parameters_rejected() {
    let (prover, _) = setup();
    let proof = prover.prove_range(&[9], &mut thread_rng()).unwrap();

    // A verifier whose generators differ from the prover's
    let mut params = GroupParameters::for_aggregation(1).unwrap();
    params.g_vec.swap(0, 1);
    assert!(!RangeVerifier::new(params).verify_range(&proof));
}

#[test]
fn batch_verification() {
    let (prover, verifier) = setup();
    let mut rng = thread_rng();
    let mut proofs: Vec<_> = (0..6u64)
        .map(|v| prover.prove_range(&[v, v << 32], &mut rng).unwrap())
        .collect();

    assert!(verifier.verify_batch(&proofs));

    proofs[4].th += Scalar::ONE;
    assert!(!verifier.verify_batch(&proofs));
}
