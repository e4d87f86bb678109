//! Inner Product Argument prover implementation

use crate::InnerProductProof;
use bulletproofs_core::{
    ensure_len, utils::inner_product, BulletproofsError, BulletproofsResult, GroupElement,
    GroupParameters, TranscriptProtocol,
};
use curve25519_dalek::{
    ristretto::RistrettoPoint, scalar::Scalar, traits::VartimeMultiscalarMul,
};
use merlin::Transcript;
use rayon::prelude::*;
use std::iter;
use tracing::{instrument, trace};

/// Inner Product Argument prover
#[derive(Debug, Clone)]
pub struct InnerProductProver {
    g_vec: Vec<RistrettoPoint>,
    h_vec: Vec<RistrettoPoint>,
    u: RistrettoPoint,
}

/// Check that both generator vectors have the same power-of-two length.
pub(crate) fn check_generators(
    g_vec: &[RistrettoPoint],
    h_vec: &[RistrettoPoint],
) -> BulletproofsResult<()> {
    ensure_len(g_vec.len(), h_vec.len())?;
    if !g_vec.len().is_power_of_two() {
        return Err(BulletproofsError::InvalidParameters(format!(
            "generator length {} is not a power of two",
            g_vec.len()
        )));
    }
    Ok(())
}

/// `G_lo * x_lo + G_hi * x_hi`, element-wise
pub(crate) fn fold_generators(
    lo: &[RistrettoPoint],
    hi: &[RistrettoPoint],
    x_lo: Scalar,
    x_hi: Scalar,
) -> Vec<RistrettoPoint> {
    lo.par_iter()
        .zip(hi.par_iter())
        .map(|(l, h)| RistrettoPoint::vartime_multiscalar_mul([x_lo, x_hi], [*l, *h]))
        .collect()
}

impl InnerProductProver {
    /// Create a new IPA prover over the parameters' generator vectors
    pub fn new(params: &GroupParameters) -> BulletproofsResult<Self> {
        Self::with_generators(params.g_vec.clone(), params.h_vec.clone(), params.u)
    }

    /// Create a prover over explicit generators, e.g. a rescaled `H'`
    pub fn with_generators(
        g_vec: Vec<RistrettoPoint>,
        h_vec: Vec<RistrettoPoint>,
        u: RistrettoPoint,
    ) -> BulletproofsResult<Self> {
        check_generators(&g_vec, &h_vec)?;
        Ok(Self { g_vec, h_vec, u })
    }

    /// Create an inner product proof
    ///
    /// Proves knowledge of vectors `a` and `b` with `<a,b> = c` such that
    /// `P = <a,G> + <b,H>`. The claimed product is bound by folding
    /// `U·w·c` into `P`, where `w` is the challenge derived from `P`.
    #[instrument(skip_all, name = "ipa::prove", fields(n = a.len()))]
    pub fn prove(
        &self,
        transcript: &mut Transcript,
        p: &GroupElement,
        c: &Scalar,
        a: &[Scalar],
        b: &[Scalar],
    ) -> BulletproofsResult<InnerProductProof> {
        let mut n = self.g_vec.len();
        ensure_len(n, a.len())?;
        ensure_len(n, b.len())?;

        if inner_product(a, b)? != *c {
            return Err(BulletproofsError::ArithmeticInconsistency(
                "claimed inner product does not match <a,b>",
            ));
        }

        transcript.innerproduct_domain_sep(n as u64);
        transcript.append_point(b"P", &p.compress());
        let w = transcript.challenge_scalar(b"w");
        let ux = self.u * w;

        let lg_n = n.trailing_zeros() as usize;
        let mut l_vec = Vec::with_capacity(lg_n);
        let mut r_vec = Vec::with_capacity(lg_n);
        let mut challenges = Vec::with_capacity(lg_n + 1);

        let mut current_a = a.to_vec();
        let mut current_b = b.to_vec();
        let mut current_g = self.g_vec.clone();
        let mut current_h = self.h_vec.clone();

        while n > 1 {
            n /= 2;

            // Split vectors
            let (a_l, a_r) = current_a.split_at(n);
            let (b_l, b_r) = current_b.split_at(n);
            let (g_l, g_r) = current_g.split_at(n);
            let (h_l, h_r) = current_h.split_at(n);

            // Compute cross terms
            let c_l = inner_product(a_l, b_r)?;
            let c_r = inner_product(a_r, b_l)?;

            // L = <a_L, G_R> + <b_R, H_L> + Ux * c_L
            // R = <a_R, G_L> + <b_L, H_R> + Ux * c_R
            let (l, r) = rayon::join(
                || {
                    GroupElement::multiscalar_mul(
                        a_l.iter().chain(b_r.iter()).cloned().chain(iter::once(c_l)),
                        g_r.iter().chain(h_l.iter()).cloned().chain(iter::once(ux)),
                    )
                },
                || {
                    GroupElement::multiscalar_mul(
                        a_r.iter().chain(b_l.iter()).cloned().chain(iter::once(c_r)),
                        g_l.iter().chain(h_r.iter()).cloned().chain(iter::once(ux)),
                    )
                },
            );
            let (l, r) = (l.compress(), r.compress());

            transcript.append_point(b"L", &l);
            transcript.append_point(b"R", &r);
            let x = transcript.challenge_scalar(b"x");
            let x_inv = x.invert();
            trace!(round = challenges.len(), remaining = n, "folded");

            // a' = a_L * x + a_R * x^{-1},  b' = b_L * x^{-1} + b_R * x
            let folded_a = a_l.iter().zip(a_r).map(|(lo, hi)| lo * x + hi * x_inv).collect();
            let folded_b = b_l.iter().zip(b_r).map(|(lo, hi)| lo * x_inv + hi * x).collect();
            // G' = G_L * x^{-1} + G_R * x,  H' = H_L * x + H_R * x^{-1}
            let folded_g = fold_generators(g_l, g_r, x_inv, x);
            let folded_h = fold_generators(h_l, h_r, x, x_inv);

            l_vec.push(l);
            r_vec.push(r);
            challenges.push(x);

            current_a = folded_a;
            current_b = folded_b;
            current_g = folded_g;
            current_h = folded_h;
        }

        challenges.push(w);

        Ok(InnerProductProof {
            l_vec,
            r_vec,
            a: current_a[0],
            b: current_b[0],
            challenges,
        })
    }
}
