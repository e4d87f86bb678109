//! # CLI Tools for Range Proofs
//!
//! Shared plumbing for the `prove-range` and `verify-range` binaries:
//! proof encodings, input parsing, file handling and logging setup.

pub mod common;

use bulletproofs_core::BulletproofsError;
use thiserror::Error;

/// Error types for CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Hex decoding error: {0}")]
    HexError(#[from] hex::FromHexError),
    #[error("Proof error: {0}")]
    ProofError(#[from] BulletproofsError),
    #[error("Invalid value '{0}': expected a decimal or 0x-prefixed hex integer")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
