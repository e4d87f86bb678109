//! Polynomials over scalars used by the range proof

use crate::BIT_LENGTH;
use bulletproofs_core::{
    utils::{inner_product, sum_of_powers, vector_add},
    BulletproofsResult,
};
use curve25519_dalek::scalar::Scalar;

/// A degree-1 vector polynomial `a + b·X`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecPoly1(pub Vec<Scalar>, pub Vec<Scalar>);

/// A degree-2 scalar polynomial `t0 + t1·X + t2·X^2`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poly2(pub Scalar, pub Scalar, pub Scalar);

impl VecPoly1 {
    /// `<self(X), rhs(X)>` as a scalar polynomial
    pub fn inner_product(&self, rhs: &VecPoly1) -> BulletproofsResult<Poly2> {
        // Karatsuba: t1 = <l0 + l1, r0 + r1> - t0 - t2
        let t0 = inner_product(&self.0, &rhs.0)?;
        let t2 = inner_product(&self.1, &rhs.1)?;

        let l0_plus_l1 = vector_add(&self.0, &self.1)?;
        let r0_plus_r1 = vector_add(&rhs.0, &rhs.1)?;
        let t1 = inner_product(&l0_plus_l1, &r0_plus_r1)? - t0 - t2;

        Ok(Poly2(t0, t1, t2))
    }

    /// Evaluate at `x`
    pub fn eval(&self, x: Scalar) -> Vec<Scalar> {
        self.0.iter().zip(self.1.iter()).map(|(a, b)| a + b * x).collect()
    }
}

impl Poly2 {
    /// Evaluate at `x`
    pub fn eval(&self, x: Scalar) -> Scalar {
        self.0 + x * (self.1 + x * self.2)
    }
}

/// `δ(y, z) = (z - z^2)·<1, y^{nm}> - Σ_j z^{3+j}·<1, 2^n>` for `m` values of
/// `n = 64` bits.
pub fn delta(y: &Scalar, z: &Scalar, m: usize) -> Scalar {
    let sum_y = sum_of_powers(BIT_LENGTH * m, y);
    let sum_2 = sum_of_powers(BIT_LENGTH, &Scalar::from(2u64));
    let sum_z = sum_of_powers(m, z);
    let z_sq = z * z;

    (z - z_sq) * sum_y - z_sq * z * sum_2 * sum_z
}
