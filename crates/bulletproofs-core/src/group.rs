//! Group operations and point utilities

use crate::{BulletproofsError, BulletproofsResult};
use curve25519_dalek::{
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
    traits::{Identity, IsIdentity, VartimeMultiscalarMul},
};
use serde::{Deserialize, Serialize};

/// Width in bytes of a serialized point or scalar
pub const ENCODING_WIDTH: usize = 32;

/// A point on the Ristretto group with additional utility methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupElement(pub RistrettoPoint);

impl GroupElement {
    /// Identity element
    pub fn identity() -> Self {
        Self(RistrettoPoint::identity())
    }

    /// Whether this is the point at infinity
    pub fn is_identity(&self) -> bool {
        self.0.is_identity()
    }

    /// Create from compressed point
    pub fn from_compressed(compressed: &CompressedRistretto) -> BulletproofsResult<Self> {
        compressed
            .decompress()
            .map(Self)
            .ok_or_else(|| BulletproofsError::InvalidProof("Invalid compressed point".to_string()))
    }

    /// Compress this point
    pub fn compress(&self) -> CompressedRistretto {
        self.0.compress()
    }

    /// `self * scalar`; scalars are always reduced mod the group order
    pub fn mult(&self, scalar: &Scalar) -> Self {
        Self(self.0 * scalar)
    }

    /// Perform multi-scalar multiplication
    pub fn multiscalar_mul<I, J>(scalars: I, points: J) -> Self
    where
        I: IntoIterator<Item = Scalar>,
        J: IntoIterator<Item = RistrettoPoint>,
    {
        Self(RistrettoPoint::vartime_multiscalar_mul(scalars, points))
    }
}

impl std::ops::Add for GroupElement {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::ops::Sub for GroupElement {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::ops::Mul<Scalar> for GroupElement {
    type Output = Self;

    fn mul(self, scalar: Scalar) -> Self {
        Self(self.0 * scalar)
    }
}

impl std::ops::Neg for GroupElement {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<RistrettoPoint> for GroupElement {
    fn from(point: RistrettoPoint) -> Self {
        Self(point)
    }
}

impl From<GroupElement> for RistrettoPoint {
    fn from(element: GroupElement) -> Self {
        element.0
    }
}

/// Reduce a 32-byte big-endian integer modulo the group order.
pub fn scalar_from_be_bytes_mod_order(bytes: &[u8; ENCODING_WIDTH]) -> Scalar {
    let mut le = *bytes;
    le.reverse();
    Scalar::from_bytes_mod_order(le)
}

/// Parse a 32-byte big-endian scalar, rejecting values `>= N`.
pub fn scalar_from_be_bytes_canonical(bytes: &[u8; ENCODING_WIDTH]) -> Option<Scalar> {
    let mut le = *bytes;
    le.reverse();
    Option::from(Scalar::from_canonical_bytes(le))
}

/// Big-endian fixed-width encoding of a scalar.
pub fn scalar_to_be_bytes(scalar: &Scalar) -> [u8; ENCODING_WIDTH] {
    let mut be = scalar.to_bytes();
    be.reverse();
    be
}
