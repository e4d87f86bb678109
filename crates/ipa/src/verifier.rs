//! Inner Product Argument verifier implementation

use crate::{
    prover::{check_generators, fold_generators},
    InnerProductProof,
};
use bulletproofs_core::{
    BulletproofsError, BulletproofsResult, GroupElement, GroupParameters, TranscriptProtocol,
};
use curve25519_dalek::{
    ristretto::RistrettoPoint,
    scalar::Scalar,
    traits::{IsIdentity, VartimeMultiscalarMul},
};
use merlin::Transcript;
use std::iter;
use tracing::{debug, instrument};

/// Inner Product Argument verifier
#[derive(Debug, Clone)]
pub struct InnerProductVerifier {
    g_vec: Vec<RistrettoPoint>,
    h_vec: Vec<RistrettoPoint>,
    u: RistrettoPoint,
}

/// Challenges recomputed from the transcript, already checked against the proof
struct Replay {
    /// per-round challenges
    x: Vec<Scalar>,
    /// base challenge derived from `P`
    w: Scalar,
    l_vec: Vec<GroupElement>,
    r_vec: Vec<GroupElement>,
}

impl InnerProductVerifier {
    /// Create a new IPA verifier over the parameters' generator vectors
    pub fn new(params: &GroupParameters) -> BulletproofsResult<Self> {
        Self::with_generators(params.g_vec.clone(), params.h_vec.clone(), params.u)
    }

    /// Create a verifier over explicit generators, e.g. a rescaled `H'`
    pub fn with_generators(
        g_vec: Vec<RistrettoPoint>,
        h_vec: Vec<RistrettoPoint>,
        u: RistrettoPoint,
    ) -> BulletproofsResult<Self> {
        check_generators(&g_vec, &h_vec)?;
        Ok(Self { g_vec, h_vec, u })
    }

    /// Replay the transcript and compare every challenge with the stored one.
    fn replay(
        &self,
        transcript: &mut Transcript,
        proof: &InnerProductProof,
        p: &GroupElement,
    ) -> BulletproofsResult<Replay> {
        proof.validate_structure()?;

        let n = self.g_vec.len();
        if 1usize << proof.num_rounds() != n {
            return Err(BulletproofsError::InvalidProof(format!(
                "expected {} rounds for vector length {}, got {}",
                n.trailing_zeros(),
                n,
                proof.num_rounds()
            )));
        }

        transcript.innerproduct_domain_sep(n as u64);
        transcript.append_point(b"P", &p.compress());
        let w = transcript.challenge_scalar(b"w");
        if proof.base_challenge() != Some(&w) {
            return Err(BulletproofsError::ChallengeMismatch("inner product base"));
        }

        let mut x = Vec::with_capacity(proof.num_rounds());
        for ((l, r), stored) in proof
            .l_vec
            .iter()
            .zip(proof.r_vec.iter())
            .zip(proof.round_challenges())
        {
            transcript.append_point(b"L", l);
            transcript.append_point(b"R", r);
            let challenge = transcript.challenge_scalar(b"x");
            if challenge != *stored {
                return Err(BulletproofsError::ChallengeMismatch("inner product round"));
            }
            x.push(challenge);
        }

        Ok(Replay {
            x,
            w,
            l_vec: proof.decompress_l_vec()?,
            r_vec: proof.decompress_r_vec()?,
        })
    }

    /// Verify by folding `G`, `H` and `P` round by round, as the prover did.
    #[instrument(skip_all, name = "ipa::verify")]
    pub fn verify_detailed(
        &self,
        transcript: &mut Transcript,
        proof: &InnerProductProof,
        p: &GroupElement,
        c: &Scalar,
    ) -> BulletproofsResult<()> {
        let replay = self.replay(transcript, proof, p)?;
        let ux = GroupElement::from(self.u * replay.w);

        let mut p_prime = *p + ux * *c;
        let mut g = self.g_vec.clone();
        let mut h = self.h_vec.clone();

        for ((x, l), r) in replay.x.iter().zip(&replay.l_vec).zip(&replay.r_vec) {
            let x_inv = x.invert();
            let half = g.len() / 2;
            let (g_l, g_r) = g.split_at(half);
            let (h_l, h_r) = h.split_at(half);

            let folded_g = fold_generators(g_l, g_r, x_inv, *x);
            let folded_h = fold_generators(h_l, h_r, *x, x_inv);
            g = folded_g;
            h = folded_h;

            // P' = L * x^2 + P + R * x^{-2}
            p_prime = *l * (x * x) + p_prime + *r * (x_inv * x_inv);
        }

        let expected = GroupElement::multiscalar_mul(
            [proof.a, proof.b, proof.a * proof.b],
            [g[0], h[0], ux.0],
        );

        if p_prime != expected {
            return Err(BulletproofsError::VerificationFailed);
        }
        Ok(())
    }

    /// Verify with a single multi-scalar multiplication.
    ///
    /// For generator index `i`, the folded `G` coefficient is
    /// `s_i = Π_j x_j^{±1}`, positive where bit `lg_n-1-j` of `i` is set;
    /// the `H` coefficient is `1/s_i = s_{n-1-i}`.
    #[instrument(skip_all, name = "ipa::verify_fast")]
    pub fn verify_fast_detailed(
        &self,
        transcript: &mut Transcript,
        proof: &InnerProductProof,
        p: &GroupElement,
        c: &Scalar,
    ) -> BulletproofsResult<()> {
        let replay = self.replay(transcript, proof, p)?;
        let lg_n = replay.x.len();
        let n = self.g_vec.len();

        let mut x_inv = replay.x.clone();
        let all_inv = Scalar::batch_invert(&mut x_inv);
        let x_sq: Vec<Scalar> = replay.x.iter().map(|x| x * x).collect();
        let x_inv_sq: Vec<Scalar> = x_inv.iter().map(|x| x * x).collect();

        let mut s = Vec::with_capacity(n);
        s.push(all_inv);
        for i in 1..n {
            let lg_i = (usize::BITS - 1 - i.leading_zeros()) as usize;
            let k = 1 << lg_i;
            s.push(s[i - k] * x_sq[(lg_n - 1) - lg_i]);
        }

        // <a*s, G> + <b/s, H> + U*w*(ab - c) - P - Σ (L x^2 + R x^-2) == 0
        let g_scalars = s.iter().map(|s_i| proof.a * s_i);
        let h_scalars = s.iter().rev().map(|s_inv_i| proof.b * s_inv_i);
        let u_scalar = replay.w * (proof.a * proof.b - c);
        let lr_scalars = x_sq.iter().chain(x_inv_sq.iter()).map(|e| -e);

        let check = RistrettoPoint::vartime_multiscalar_mul(
            g_scalars
                .chain(h_scalars)
                .chain(iter::once(u_scalar))
                .chain(iter::once(-Scalar::ONE))
                .chain(lr_scalars),
            self.g_vec
                .iter()
                .chain(self.h_vec.iter())
                .chain(iter::once(&self.u))
                .chain(iter::once(&p.0))
                .chain(replay.l_vec.iter().map(|l| &l.0))
                .chain(replay.r_vec.iter().map(|r| &r.0)),
        );

        if !check.is_identity() {
            return Err(BulletproofsError::VerificationFailed);
        }
        Ok(())
    }

    /// Verify an inner product proof for commitment `P` and claimed product `c`
    pub fn verify(
        &self,
        transcript: &mut Transcript,
        proof: &InnerProductProof,
        p: &GroupElement,
        c: &Scalar,
    ) -> bool {
        Self::accept(self.verify_detailed(transcript, proof, p, c))
    }

    /// Single-multiexponentiation form of [`InnerProductVerifier::verify`]
    pub fn verify_fast(
        &self,
        transcript: &mut Transcript,
        proof: &InnerProductProof,
        p: &GroupElement,
        c: &Scalar,
    ) -> bool {
        Self::accept(self.verify_fast_detailed(transcript, proof, p, c))
    }

    fn accept(result: BulletproofsResult<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "inner product proof rejected");
                false
            }
        }
    }
}
