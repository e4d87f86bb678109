//! Range proof verifier implementation

use crate::{
    check_aggregation, delta,
    prover::{rescaled_h, value_weights},
    MultiRangeProof, BIT_LENGTH, TRANSCRIPT_LABEL,
};
use bulletproofs_core::{
    bulletproofs_transcript, utils::power_vector, BulletproofsError, BulletproofsResult,
    GroupElement, GroupParameters, TranscriptProtocol,
};
use curve25519_dalek::scalar::Scalar;
use ipa::InnerProductVerifier;
use rayon::prelude::*;
use std::iter;
use tracing::{debug, instrument};

/// Verifier for aggregated range proofs
#[derive(Debug, Clone)]
pub struct RangeVerifier {
    params: GroupParameters,
}

impl RangeVerifier {
    /// Create a verifier over `params`; these must match the prover's
    pub fn new(params: GroupParameters) -> Self {
        Self { params }
    }

    /// Get the parameters used by this verifier
    pub fn params(&self) -> &GroupParameters {
        &self.params
    }

    /// Verify a range proof, returning the reason on rejection
    #[instrument(skip_all, name = "range::verify", fields(m = proof.aggregation_size()))]
    pub fn verify_range_detailed(&self, proof: &MultiRangeProof) -> BulletproofsResult<()> {
        let m = proof.aggregation_size();
        check_aggregation(m)?;
        let nm = BIT_LENGTH * m;
        let params = self.params.subset(nm)?;

        let mut transcript = bulletproofs_transcript(TRANSCRIPT_LABEL);
        transcript.rangeproof_domain_sep(BIT_LENGTH as u64, m as u64);
        for v in &proof.commitments {
            transcript.append_point(b"V", v);
        }

        transcript.append_point(b"A", &proof.a);
        let y = transcript.challenge_scalar(b"y");
        if y != proof.cy {
            return Err(BulletproofsError::ChallengeMismatch("y"));
        }
        transcript.append_point(b"S", &proof.s);
        let z = transcript.challenge_scalar(b"z");
        if z != proof.cz {
            return Err(BulletproofsError::ChallengeMismatch("z"));
        }
        transcript.append_point(b"T1", &proof.t1);
        transcript.append_point(b"T2", &proof.t2);
        let x = transcript.challenge_scalar(b"x");
        if x != proof.cx {
            return Err(BulletproofsError::ChallengeMismatch("x"));
        }

        transcript.append_scalar(b"th", &proof.th);
        transcript.append_scalar(b"tau", &proof.tau);
        transcript.append_scalar(b"mu", &proof.mu);

        let commitments = proof.value_commitments()?;
        let a = GroupElement::from_compressed(&proof.a)?;
        let s = GroupElement::from_compressed(&proof.s)?;
        let t1 = GroupElement::from_compressed(&proof.t1)?;
        let t2 = GroupElement::from_compressed(&proof.t2)?;

        // G·th + H·tau == Σ V_j·z^{2+j} + G·δ(y,z) + T1·x + T2·x^2
        let z_offsets = value_weights(&z, m);
        let opened = GroupElement::multiscalar_mul([proof.th, proof.tau], [params.g, params.h]);
        let expected = GroupElement::multiscalar_mul(
            z_offsets
                .iter()
                .cloned()
                .chain([delta(&y, &z, m), x, x * x]),
            commitments
                .iter()
                .map(|v| v.0)
                .chain([params.g, t1.0, t2.0]),
        );
        if opened != expected {
            return Err(BulletproofsError::VerificationFailed);
        }

        // P = A + x·S - z·<1, G> + Σ H'_i·(z·y^i + z^{2+j}·2^{i mod n}) - μ·H
        let y_pows = power_vector(nm, &y);
        let two_pows = power_vector(BIT_LENGTH, &Scalar::from(2u64));
        let h_scalars = y_pows.iter().enumerate().map(|(i, y_i)| {
            z * y_i + z_offsets[i / BIT_LENGTH] * two_pows[i % BIT_LENGTH]
        });
        let h_prime = rescaled_h(&params, &y);

        let p = GroupElement::multiscalar_mul(
            [Scalar::ONE, x]
                .into_iter()
                .chain(iter::repeat(-z).take(nm))
                .chain(h_scalars)
                .chain(iter::once(-proof.mu)),
            [a.0, s.0]
                .into_iter()
                .chain(params.g_vec.iter().cloned())
                .chain(h_prime.iter().cloned())
                .chain(iter::once(params.h)),
        );

        InnerProductVerifier::with_generators(params.g_vec.clone(), h_prime, params.u)?
            .verify_fast_detailed(&mut transcript, &proof.ipp, &p, &proof.th)
    }

    /// Verify a range proof
    pub fn verify_range(&self, proof: &MultiRangeProof) -> bool {
        match self.verify_range_detailed(proof) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "range proof rejected");
                false
            }
        }
    }

    /// Verify independent proofs in parallel; true only if every proof verifies.
    ///
    /// An empty batch is accepted.
    #[instrument(skip_all, name = "range::verify_batch", fields(count = proofs.len()))]
    pub fn verify_batch(&self, proofs: &[MultiRangeProof]) -> bool {
        proofs.par_iter().all(|proof| self.verify_range(proof))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RangeProver;
    use rand::thread_rng;

    fn setup() -> (RangeProver, RangeVerifier) {
        let params = GroupParameters::for_aggregation(8).unwrap();
        (RangeProver::new(params.clone()), RangeVerifier::new(params))
    }

    #[test]
    fn test_verify_valid_proof() {
        let (prover, verifier) = setup();
        let proof = prover.prove_range(&[15], &mut thread_rng()).unwrap();

        assert!(verifier.verify_range(&proof));
        assert_eq!(verifier.verify_range_detailed(&proof), Ok(()));
    }

    #[test]
    fn test_verifier_with_exact_parameters() {
        let (prover, _) = setup();
        let proof = prover.prove_range(&[3, 4], &mut thread_rng()).unwrap();

        let verifier = RangeVerifier::new(GroupParameters::for_aggregation(2).unwrap());
        assert!(verifier.verify_range(&proof));
    }

    #[test]
    fn test_verifier_with_too_few_generators() {
        let (prover, _) = setup();
        let proof = prover.prove_range(&[3, 4], &mut thread_rng()).unwrap();

        let verifier = RangeVerifier::new(GroupParameters::for_aggregation(1).unwrap());
        assert!(matches!(
            verifier.verify_range_detailed(&proof),
            Err(BulletproofsError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_truncated_h_generators_rejected() {
        let (prover, _) = setup();
        let proof = prover.prove_range(&[12], &mut thread_rng()).unwrap();

        let mut params = GroupParameters::for_aggregation(1).unwrap();
        params.h_vec.truncate(32);
        let verifier = RangeVerifier::new(params.clone());

        assert_eq!(
            verifier.verify_range_detailed(&proof),
            Err(BulletproofsError::InvalidInputLength {
                expected: 64,
                actual: 32
            })
        );
        assert!(!verifier.verify_range(&proof));
        assert!(matches!(
            RangeProver::new(params).prove_range(&[12], &mut thread_rng()),
            Err(BulletproofsError::InvalidInputLength { .. })
        ));
    }

    #[test]
    fn test_challenge_mismatch_reported() {
        let (prover, verifier) = setup();
        let proof = prover.prove_range(&[99], &mut thread_rng()).unwrap();

        let mut bad_y = proof.clone();
        bad_y.cy += Scalar::ONE;
        assert_eq!(
            verifier.verify_range_detailed(&bad_y),
            Err(BulletproofsError::ChallengeMismatch("y"))
        );

        let mut bad_x = proof.clone();
        bad_x.t2 = proof.t1;
        assert_eq!(
            verifier.verify_range_detailed(&bad_x),
            Err(BulletproofsError::ChallengeMismatch("x"))
        );
    }

    #[test]
    fn test_wrong_opening_rejected() {
        let (prover, verifier) = setup();
        let mut proof = prover.prove_range(&[1000], &mut thread_rng()).unwrap();

        // Swap in a commitment to a different value; every challenge changes
        proof.commitments[0] = verifier
            .params()
            .pedersen_commit(&Scalar::from(1001u64), &Scalar::ONE)
            .compress();
        assert!(!verifier.verify_range(&proof));
    }

    #[test]
    fn test_mismatched_aggregation_rejected() {
        let (prover, verifier) = setup();
        let mut proof = prover.prove_range(&[1, 2], &mut thread_rng()).unwrap();
        proof.commitments.push(proof.commitments[0]);

        assert_eq!(
            verifier.verify_range_detailed(&proof),
            Err(BulletproofsError::UnsupportedAggregateCount(3))
        );
    }

    #[test]
    fn test_verify_batch() {
        let mut rng = thread_rng();
        let (prover, verifier) = setup();
        let proofs: Vec<_> = [vec![1u64], vec![2, 3], vec![4, 5, 6, 7]]
            .iter()
            .map(|values| prover.prove_range(values, &mut rng).unwrap())
            .collect();

        assert!(verifier.verify_batch(&proofs));
        assert!(verifier.verify_batch(&[]));

        let mut tampered = proofs;
        tampered[1].mu += Scalar::ONE;
        assert!(!verifier.verify_batch(&tampered));
    }
}
