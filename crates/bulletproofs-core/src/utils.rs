//! Scalar vector algebra modulo the group order
//!
//! Pairwise operations require equal operand lengths and fail with
//! [`BulletproofsError::InvalidInputLength`] otherwise; nothing is padded or
//! truncated.

use crate::{ensure_len, BulletproofsError, BulletproofsResult};
use curve25519_dalek::scalar::Scalar;
use rand_core::{CryptoRng, RngCore};

/// Compute powers of a scalar: [1, x, x^2, x^3, ..., x^(n-1)]
pub fn power_vector(n: usize, x: &Scalar) -> Vec<Scalar> {
    let mut powers = Vec::with_capacity(n);
    let mut current = Scalar::ONE;

    for _ in 0..n {
        powers.push(current);
        current *= x;
    }

    powers
}

/// Sum of powers `1 + x + ... + x^(n-1)`
pub fn sum_of_powers(n: usize, x: &Scalar) -> Scalar {
    power_vector(n, x).iter().sum()
}

/// Compute the inner product of two scalar vectors
pub fn inner_product(a: &[Scalar], b: &[Scalar]) -> BulletproofsResult<Scalar> {
    ensure_len(a.len(), b.len())?;
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| ai * bi).sum())
}

/// Hadamard (element-wise) product of two scalar vectors
pub fn hadamard_product(a: &[Scalar], b: &[Scalar]) -> BulletproofsResult<Vec<Scalar>> {
    ensure_len(a.len(), b.len())?;
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| ai * bi).collect())
}

/// Add two scalar vectors element-wise
pub fn vector_add(a: &[Scalar], b: &[Scalar]) -> BulletproofsResult<Vec<Scalar>> {
    ensure_len(a.len(), b.len())?;
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| ai + bi).collect())
}

/// Subtract two scalar vectors element-wise: a - b
pub fn vector_sub(a: &[Scalar], b: &[Scalar]) -> BulletproofsResult<Vec<Scalar>> {
    ensure_len(a.len(), b.len())?;
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| ai - bi).collect())
}

/// Scale a vector by a scalar
pub fn scalar_vector_mul(vec: &[Scalar], scalar: &Scalar) -> Vec<Scalar> {
    vec.iter().map(|v| v * scalar).collect()
}

/// Add the same scalar to every entry
pub fn vector_add_scalar(vec: &[Scalar], scalar: &Scalar) -> Vec<Scalar> {
    vec.iter().map(|v| v + scalar).collect()
}

/// Sample a uniform scalar from 64 bytes of `rng` output.
///
/// Errors from the source are surfaced; there is no fallback value.
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> BulletproofsResult<Scalar> {
    let mut bytes = [0u8; 64];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| BulletproofsError::RandomnessFailure(e.to_string()))?;
    Ok(Scalar::from_bytes_mod_order_wide(&bytes))
}

/// Sample `n` uniform scalars
pub fn rand_vector<R: RngCore + CryptoRng>(n: usize, rng: &mut R) -> BulletproofsResult<Vec<Scalar>> {
    (0..n).map(|_| random_scalar(rng)).collect()
}

/// Construct the bit decomposition of a value (little-endian)
pub fn bit_decomposition(value: u64, bits: usize) -> Vec<Scalar> {
    (0..bits)
        .map(|i| Scalar::from((value >> i) & 1))
        .collect()
}

#[cfg(test)]
pub(crate) mod test_rng {
    use rand_core::{CryptoRng, Error, RngCore};
    use std::num::NonZeroU32;

    /// An entropy source that always fails
    pub struct FailingRng;

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
            let code = NonZeroU32::new(Error::CUSTOM_START).unwrap();
            Err(Error::from(code))
        }
    }

    impl CryptoRng for FailingRng {}
}
