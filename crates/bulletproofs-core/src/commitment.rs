//! Pedersen commitments over the group parameters

use crate::{ensure_len, utils::rand_vector, BulletproofsResult, GroupElement, GroupParameters};
use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar};
use rand_core::{CryptoRng, RngCore};

/// `G0 * value + H0 * blinding`
pub fn pedersen_commit(params: &GroupParameters, value: &Scalar, blinding: &Scalar) -> GroupElement {
    GroupElement::multiscalar_mul([*value, *blinding], [params.g, params.h])
}

/// Check that `commitment` opens to `value` under `blinding`.
pub fn verify_commitment_opening(
    params: &GroupParameters,
    commitment: &GroupElement,
    value: &Scalar,
    blinding: &Scalar,
) -> bool {
    pedersen_commit(params, value, blinding) == *commitment
}

/// Commit to `values` with a fresh blinding scalar per index.
///
/// Returns `Σ g_vec[i]·values[i] + h_vec[i]·r[i]` together with `r`.
pub fn vector_pedersen_commit<R: RngCore + CryptoRng>(
    params: &GroupParameters,
    values: &[Scalar],
    rng: &mut R,
) -> BulletproofsResult<(GroupElement, Vec<Scalar>)> {
    ensure_len(params.vector_length(), values.len())?;
    let blindings = rand_vector(values.len(), rng)?;
    let commitment = two_vector_commit(values, &blindings, &params.g_vec, &params.h_vec)?;
    Ok((commitment, blindings))
}

/// `Σ g[i]·a[i] + h[i]·b[i]` with explicit generators.
pub fn two_vector_commit(
    a: &[Scalar],
    b: &[Scalar],
    g: &[RistrettoPoint],
    h: &[RistrettoPoint],
) -> BulletproofsResult<GroupElement> {
    ensure_len(a.len(), b.len())?;
    ensure_len(a.len(), g.len())?;
    ensure_len(a.len(), h.len())?;

    let scalars = a.iter().chain(b.iter()).cloned();
    let points = g.iter().chain(h.iter()).cloned();

    Ok(GroupElement::multiscalar_mul(scalars, points))
}
