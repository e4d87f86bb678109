//! Error types for Bulletproofs operations

use thiserror::Error;

/// Main error type for Bulletproofs operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BulletproofsError {
    /// Mismatched vector or generator lengths passed to an algebra or commitment routine
    #[error("Invalid input length: expected {expected}, got {actual}")]
    InvalidInputLength { expected: usize, actual: usize },

    /// Aggregation size is not one of 1, 2, 4 or 8
    #[error("Unsupported aggregate count {0}: must be one of 1, 2, 4, 8")]
    UnsupportedAggregateCount(usize),

    /// A value to be proven lies outside [0, 2^64 - 1]
    #[error("Value {0} is not in range [0, 2^64 - 1]")]
    ValueOutOfRange(i128),

    /// The secure random source could not produce a scalar
    #[error("Randomness failure: {0}")]
    RandomnessFailure(String),

    /// An internal self-check of the prover failed
    #[error("Arithmetic inconsistency: {0}")]
    ArithmeticInconsistency(&'static str),

    /// A recomputed Fiat-Shamir challenge disagrees with the stored one
    #[error("Challenge mismatch at {0}")]
    ChallengeMismatch(&'static str),

    /// Verification failed
    #[error("Proof verification failed")]
    VerificationFailed,

    /// Invalid proof format or structure
    #[error("Invalid proof format: {0}")]
    InvalidProof(String),

    /// Invalid parameters provided
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for Bulletproofs operations
pub type BulletproofsResult<T> = Result<T, BulletproofsError>;

/// Fails with [`BulletproofsError::InvalidInputLength`] unless `actual == expected`.
pub fn ensure_len(expected: usize, actual: usize) -> BulletproofsResult<()> {
    if expected != actual {
        return Err(BulletproofsError::InvalidInputLength { expected, actual });
    }
    Ok(())
}
