//! # Bulletproofs Range Proofs
//!
//! This crate implements aggregated range proofs using the inner product argument.
//! A range proof shows that each of `m ∈ {1, 2, 4, 8}` values hidden in Pedersen
//! commitments lies in `[0, 2^64)` without revealing the values.
//!
//! ## Mathematical Background
//!
//! For values `v_0..v_{m-1}`, the prover:
//!
//! 1. **Bit Decomposition**: writes each `v_j = <a_L^(j), 2^n>` with bits `a_L`,
//!    and sets `a_R = a_L - 1`, so `a_L ∘ a_R = 0`.
//! 2. **Vector Commitments**: commits `A` to `(a_L, a_R)` and `S` to random
//!    blinding vectors `(s_L, s_R)`.
//! 3. **Polynomial Identity**: with challenges `y, z`, builds
//!    - `l(X) = (a_L - z·1) + s_L·X`
//!    - `r(X) = y^{nm} ∘ (a_R + z·1 + s_R·X) + Σ_j z^{2+j}·(0..0 || 2^n || 0..0)`
//!
//!    whose inner product `t(X)` has constant term
//!    `t_0 = Σ_j z^{2+j}·v_j + δ(y, z)` exactly when every constraint holds.
//! 4. **Reduction**: commits to `t_1, t_2`, opens `l, r` at a challenge `x`,
//!    and proves `<l, r> = t(x)` with one inner product argument over the
//!    generators `G` and `H'_i = y^{-i}·H_i`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use range::{RangeProver, RangeVerifier};
//! use bulletproofs_core::GroupParameters;
//! use rand::rngs::OsRng;
//!
//! let params = GroupParameters::new(range::max_generators()).unwrap();
//!
//! let prover = RangeProver::new(params.clone());
//! let proof = prover.prove_range(&[5, 10, 15, 20], &mut OsRng).unwrap();
//!
//! let verifier = RangeVerifier::new(params);
//! assert!(verifier.verify_range(&proof));
//! ```

pub mod polynomial;
pub mod proof;
pub mod prover;
pub mod verifier;


pub use polynomial::*;
pub use proof::*;
pub use prover::*;
pub use verifier::*;

use bulletproofs_core::{BulletproofsError, BulletproofsResult};

/// Bits per proven value
pub const BIT_LENGTH: usize = bulletproofs_core::BITS_PER_VALUE;

/// Number of values that may be aggregated into one proof
pub const SUPPORTED_AGGREGATIONS: [usize; 4] = [1, 2, 4, 8];

/// Transcript label shared by prover and verifier
pub const TRANSCRIPT_LABEL: &[u8] = b"MultiRangeProof";

/// Generators needed to serve every supported aggregation size
pub const fn max_generators() -> usize {
    BIT_LENGTH * SUPPORTED_AGGREGATIONS[SUPPORTED_AGGREGATIONS.len() - 1]
}

/// Fail unless `m` values can be aggregated into one proof.
pub fn check_aggregation(m: usize) -> BulletproofsResult<()> {
    if !SUPPORTED_AGGREGATIONS.contains(&m) {
        return Err(BulletproofsError::UnsupportedAggregateCount(m));
    }
    Ok(())
}
