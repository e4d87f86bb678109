//! Range proof prover implementation

use crate::{
    check_aggregation, delta, MultiRangeProof, Poly2, VecPoly1, BIT_LENGTH, TRANSCRIPT_LABEL,
};
use bulletproofs_core::{
    bulletproofs_transcript, ensure_len,
    utils::{
        bit_decomposition, hadamard_product, power_vector, rand_vector, random_scalar,
        vector_add, vector_add_scalar,
    },
    BulletproofsError, BulletproofsResult, GroupElement, GroupParameters, TranscriptProtocol,
};
use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar};
use ipa::InnerProductProver;
use rand_core::{CryptoRng, RngCore};
use std::iter;
use tracing::{debug, instrument};

/// Prover for aggregated range proofs
#[derive(Debug, Clone)]
pub struct RangeProver {
    params: GroupParameters,
}

impl RangeProver {
    /// Create a prover over `params`.
    ///
    /// A proof over `m` values uses the first `64·m` generator pairs, so
    /// one parameter set sized for the largest aggregation serves all.
    pub fn new(params: GroupParameters) -> Self {
        Self { params }
    }

    /// Get the parameters used by this prover
    pub fn params(&self) -> &GroupParameters {
        &self.params
    }

    /// Prove that every value lies in `[0, 2^64)`, sampling fresh blindings
    pub fn prove_range<R: RngCore + CryptoRng>(
        &self,
        values: &[u64],
        rng: &mut R,
    ) -> BulletproofsResult<MultiRangeProof> {
        check_aggregation(values.len())?;
        let blindings = rand_vector(values.len(), rng)?;
        self.prove_range_with_blindings(values, &blindings, rng)
    }

    /// Prove values arriving as wide integers, rejecting any outside
    /// `[0, 2^64 - 1]` before touching the curve.
    pub fn prove_range_checked<R: RngCore + CryptoRng>(
        &self,
        values: &[i128],
        rng: &mut R,
    ) -> BulletproofsResult<MultiRangeProof> {
        check_aggregation(values.len())?;
        let values = values
            .iter()
            .map(|v| u64::try_from(*v).map_err(|_| BulletproofsError::ValueOutOfRange(*v)))
            .collect::<BulletproofsResult<Vec<u64>>>()?;
        self.prove_range(&values, rng)
    }

    /// Prove that every value lies in `[0, 2^64)` with caller-chosen
    /// commitment blindings `γ_j`
    #[instrument(skip_all, name = "range::prove", fields(m = values.len()))]
    pub fn prove_range_with_blindings<R: RngCore + CryptoRng>(
        &self,
        values: &[u64],
        blindings: &[Scalar],
        rng: &mut R,
    ) -> BulletproofsResult<MultiRangeProof> {
        let m = values.len();
        check_aggregation(m)?;
        ensure_len(m, blindings.len())?;

        let nm = BIT_LENGTH * m;
        let params = self.params.subset(nm)?;

        let mut transcript = bulletproofs_transcript(TRANSCRIPT_LABEL);
        transcript.rangeproof_domain_sep(BIT_LENGTH as u64, m as u64);

        let commitments: Vec<_> = values
            .iter()
            .zip(blindings)
            .map(|(v, gamma)| params.pedersen_commit(&Scalar::from(*v), gamma).compress())
            .collect();
        for v in &commitments {
            transcript.append_point(b"V", v);
        }

        // a_L holds the bits of every value back to back; a_R = a_L - 1
        let a_l: Vec<Scalar> = values
            .iter()
            .flat_map(|v| bit_decomposition(*v, BIT_LENGTH))
            .collect();
        let a_r = vector_add_scalar(&a_l, &-Scalar::ONE);

        let alpha = random_scalar(rng)?;
        let a = params.two_vector_commit(&a_l, &a_r)? + params.h_generator() * alpha;

        let s_l = rand_vector(nm, rng)?;
        let s_r = rand_vector(nm, rng)?;
        let rho = random_scalar(rng)?;
        let s = params.two_vector_commit(&s_l, &s_r)? + params.h_generator() * rho;

        let (a, s) = (a.compress(), s.compress());
        transcript.append_point(b"A", &a);
        let y = transcript.challenge_scalar(b"y");
        transcript.append_point(b"S", &s);
        let z = transcript.challenge_scalar(b"z");

        let y_pows = power_vector(nm, &y);
        let z_offsets = value_weights(&z, m);
        let two_pows = power_vector(BIT_LENGTH, &Scalar::from(2u64));
        let bit_weights: Vec<Scalar> = z_offsets
            .iter()
            .flat_map(|zj| two_pows.iter().map(move |p| zj * p))
            .collect();

        // l(X) = (a_L - z) + s_L·X
        // r(X) = y^nm ∘ (a_R + z + s_R·X) + z^{2+j}·2^n per value
        let l_poly = VecPoly1(vector_add_scalar(&a_l, &-z), s_l);
        let r_poly = VecPoly1(
            vector_add(
                &hadamard_product(&y_pows, &vector_add_scalar(&a_r, &z))?,
                &bit_weights,
            )?,
            hadamard_product(&y_pows, &s_r)?,
        );
        let t_poly = l_poly.inner_product(&r_poly)?;

        let committed: Scalar = values
            .iter()
            .zip(&z_offsets)
            .map(|(v, zj)| zj * Scalar::from(*v))
            .sum();
        if t_poly.0 != committed + delta(&y, &z, m) {
            return Err(BulletproofsError::ArithmeticInconsistency(
                "t0 does not match the committed values",
            ));
        }

        let tau_1 = random_scalar(rng)?;
        let tau_2 = random_scalar(rng)?;
        let Poly2(_, t_1, t_2) = t_poly;
        let t1 = params.pedersen_commit(&t_1, &tau_1).compress();
        let t2 = params.pedersen_commit(&t_2, &tau_2).compress();

        transcript.append_point(b"T1", &t1);
        transcript.append_point(b"T2", &t2);
        let x = transcript.challenge_scalar(b"x");

        let l = l_poly.eval(x);
        let r = r_poly.eval(x);
        let th = t_poly.eval(x);
        let blinded_values: Scalar = blindings.iter().zip(&z_offsets).map(|(g, zj)| zj * g).sum();
        let tau = tau_2 * x * x + tau_1 * x + blinded_values;
        let mu = alpha + rho * x;

        transcript.append_scalar(b"th", &th);
        transcript.append_scalar(b"tau", &tau);
        transcript.append_scalar(b"mu", &mu);

        let h_prime = rescaled_h(&params, &y);
        let p = GroupElement::multiscalar_mul(
            l.iter().chain(r.iter()).cloned(),
            params.g_vec.iter().chain(h_prime.iter()).cloned(),
        );
        let ipp = InnerProductProver::with_generators(params.g_vec.clone(), h_prime, params.u)?
            .prove(&mut transcript, &p, &th, &l, &r)?;

        debug!(m, rounds = ipp.num_rounds(), "range proof created");

        Ok(MultiRangeProof {
            commitments,
            a,
            s,
            t1,
            t2,
            tau,
            th,
            mu,
            ipp,
            cy: y,
            cz: z,
            cx: x,
        })
    }
}

/// `[z^2, z^3, .., z^{m+1}]`, the weight of each value's constraint
pub(crate) fn value_weights(z: &Scalar, m: usize) -> Vec<Scalar> {
    iter::successors(Some(z * z), |zj| Some(zj * z))
        .take(m)
        .collect()
}

/// `H'_i = H_i·y^{-i}` over every generator in `params`
pub(crate) fn rescaled_h(params: &GroupParameters, y: &Scalar) -> Vec<RistrettoPoint> {
    let y_inv_pows = power_vector(params.vector_length(), &y.invert());
    params
        .h_vec
        .iter()
        .zip(y_inv_pows)
        .map(|(h, y_inv)| h * y_inv)
        .collect()
}
