//! Deterministic group parameters for Bulletproofs
//!
//! Every generator is derived by hashing a fixed label and its index into the
//! Ristretto group, so prover and verifier reconstruct bit-identical
//! parameters for the same length, and a shorter parameter set is always a
//! prefix of a longer one.

use crate::{commitment, ensure_len, BulletproofsError, BulletproofsResult, GroupElement};
use curve25519_dalek::{
    constants::RISTRETTO_BASEPOINT_POINT, ristretto::RistrettoPoint, scalar::Scalar,
};
use sha2::{Digest, Sha512};

const GENERATOR_DOMAIN: &[u8] = b"bulletproofs_generator_v1";

/// Bits per value in a range proof; one generator pair per bit
pub const BITS_PER_VALUE: usize = 64;

/// Group parameters shared read-only by a prover and verifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupParameters {
    /// Base point for committed values (G0)
    pub g: RistrettoPoint,
    /// Base point for blinding factors (H0)
    pub h: RistrettoPoint,
    /// Vector generators for the left side
    pub g_vec: Vec<RistrettoPoint>,
    /// Vector generators for the right side
    pub h_vec: Vec<RistrettoPoint>,
    /// Auxiliary generator binding the inner product
    pub u: RistrettoPoint,
}

impl GroupParameters {
    /// Hash arbitrary bytes to a RistrettoPoint (deterministic)
    fn hash_to_point(label: &[u8], index: Option<u64>) -> RistrettoPoint {
        let mut hasher = Sha512::new();
        hasher.update(GENERATOR_DOMAIN);
        hasher.update(label);
        if let Some(i) = index {
            hasher.update(i.to_le_bytes());
        }
        let hash = hasher.finalize();

        let mut bytes = [0u8; 64];
        bytes.copy_from_slice(&hash);
        RistrettoPoint::from_uniform_bytes(&bytes)
    }

    /// Derive parameters with `vector_length` generator pairs.
    ///
    /// The inner-product recursion halves the generator vectors each round,
    /// so `vector_length` must be a power of two.
    pub fn new(vector_length: usize) -> BulletproofsResult<Self> {
        if !vector_length.is_power_of_two() {
            return Err(BulletproofsError::InvalidParameters(format!(
                "vector length {} is not a power of two",
                vector_length
            )));
        }

        let g = RISTRETTO_BASEPOINT_POINT;
        let h = Self::hash_to_point(b"H0", None);
        let (g_vec, h_vec) = (0..vector_length as u64)
            .map(|i| {
                (
                    Self::hash_to_point(b"G", Some(i)),
                    Self::hash_to_point(b"H", Some(i)),
                )
            })
            .unzip();
        let u = Self::hash_to_point(b"U", None);

        Ok(Self {
            g,
            h,
            g_vec,
            h_vec,
            u,
        })
    }

    /// Parameters with exactly one generator pair per bit of `m` 64-bit values
    pub fn for_aggregation(m: usize) -> BulletproofsResult<Self> {
        let length = m.checked_mul(BITS_PER_VALUE).ok_or_else(|| {
            BulletproofsError::InvalidParameters(format!("aggregation size {} is too large", m))
        })?;
        Self::new(length)
    }

    /// Get the vector length
    pub fn vector_length(&self) -> usize {
        self.g_vec.len()
    }

    /// Get the G generator (used for value commitments)
    pub fn g_generator(&self) -> GroupElement {
        GroupElement::from(self.g)
    }

    /// Get the H generator (used for blinding factor commitments)
    pub fn h_generator(&self) -> GroupElement {
        GroupElement::from(self.h)
    }

    /// `G0 * value + H0 * blinding`
    pub fn pedersen_commit(&self, value: &Scalar, blinding: &Scalar) -> GroupElement {
        commitment::pedersen_commit(self, value, blinding)
    }

    /// `<a, g_vec> + <b, h_vec>` over the first `a.len()` generators
    pub fn two_vector_commit(&self, a: &[Scalar], b: &[Scalar]) -> BulletproofsResult<GroupElement> {
        ensure_len(self.g_vec.len(), self.h_vec.len())?;
        if a.len() > self.vector_length() {
            return Err(BulletproofsError::InvalidInputLength {
                expected: self.vector_length(),
                actual: a.len(),
            });
        }
        commitment::two_vector_commit(a, b, &self.g_vec[..a.len()], &self.h_vec[..a.len()])
    }

    /// Create a subset of generators with the specified length
    pub fn subset(&self, length: usize) -> BulletproofsResult<GroupParameters> {
        ensure_len(self.g_vec.len(), self.h_vec.len())?;
        if length > self.vector_length() {
            return Err(BulletproofsError::InvalidParameters(format!(
                "need {} generators, have {}",
                length,
                self.vector_length()
            )));
        }
        if !length.is_power_of_two() {
            return Err(BulletproofsError::InvalidParameters(format!(
                "vector length {} is not a power of two",
                length
            )));
        }

        Ok(GroupParameters {
            g: self.g,
            h: self.h,
            g_vec: self.g_vec[..length].to_vec(),
            h_vec: self.h_vec[..length].to_vec(),
            u: self.u,
        })
    }
}
