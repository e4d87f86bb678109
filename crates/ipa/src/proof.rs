//! Inner Product Argument proof structure

use bulletproofs_core::{
    encoding::{ByteReader, ByteWriter},
    BulletproofsError, BulletproofsResult, GroupElement,
};
use curve25519_dalek::{ristretto::CompressedRistretto, scalar::Scalar};
use serde::{Deserialize, Serialize};

/// Upper bound on folding rounds accepted when decoding (vectors of length 2^32)
pub const MAX_ROUNDS: usize = 32;

/// An inner product argument proof
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerProductProof {
    /// L values from each folding round (log_2(n) elements)
    pub l_vec: Vec<CompressedRistretto>,
    /// R values from each folding round (log_2(n) elements)
    pub r_vec: Vec<CompressedRistretto>,
    /// Final scalar value a
    pub a: Scalar,
    /// Final scalar value b
    pub b: Scalar,
    /// Round challenges in round order, followed by the base challenge
    pub challenges: Vec<Scalar>,
}

impl InnerProductProof {
    /// Create a new inner product proof
    pub fn new(
        l_vec: Vec<GroupElement>,
        r_vec: Vec<GroupElement>,
        a: Scalar,
        b: Scalar,
        challenges: Vec<Scalar>,
    ) -> Self {
        Self {
            l_vec: l_vec.iter().map(|p| p.compress()).collect(),
            r_vec: r_vec.iter().map(|p| p.compress()).collect(),
            a,
            b,
            challenges,
        }
    }

    /// Get the number of folding rounds
    pub fn num_rounds(&self) -> usize {
        self.l_vec.len()
    }

    /// Challenge derived from `P` before the first round
    pub fn base_challenge(&self) -> Option<&Scalar> {
        self.challenges.last()
    }

    /// Challenges of the folding rounds, in round order
    pub fn round_challenges(&self) -> &[Scalar] {
        let rounds = self.challenges.len().saturating_sub(1);
        &self.challenges[..rounds]
    }

    /// Validate proof structure
    pub fn validate_structure(&self) -> BulletproofsResult<()> {
        if self.l_vec.len() != self.r_vec.len() {
            return Err(BulletproofsError::InvalidProof(
                "L and R vectors must have the same length".to_string(),
            ));
        }
        if self.challenges.len() != self.l_vec.len() + 1 {
            return Err(BulletproofsError::InvalidProof(format!(
                "expected {} challenges for {} rounds, got {}",
                self.l_vec.len() + 1,
                self.l_vec.len(),
                self.challenges.len()
            )));
        }
        if self.l_vec.len() > MAX_ROUNDS {
            return Err(BulletproofsError::InvalidProof(format!(
                "{} rounds exceeds the maximum of {}",
                self.l_vec.len(),
                MAX_ROUNDS
            )));
        }

        // Empty L/R vectors are valid for base case (vector length 1)
        Ok(())
    }

    /// Decompress L values
    pub fn decompress_l_vec(&self) -> BulletproofsResult<Vec<GroupElement>> {
        self.l_vec.iter().map(GroupElement::from_compressed).collect()
    }

    /// Decompress R values
    pub fn decompress_r_vec(&self) -> BulletproofsResult<Vec<GroupElement>> {
        self.r_vec.iter().map(GroupElement::from_compressed).collect()
    }

    /// Get proof size in bytes
    pub fn size_bytes(&self) -> usize {
        // round count, L and R per round, a and b, one challenge per round plus the base
        4 + self.l_vec.len() * 64 + 64 + self.challenges.len() * 32
    }

    /// Append the canonical encoding to `writer`
    pub fn write_to(&self, writer: &mut ByteWriter) {
        writer.write_u32(self.l_vec.len() as u32);
        self.l_vec.iter().for_each(|p| writer.write_point(p));
        self.r_vec.iter().for_each(|p| writer.write_point(p));
        writer.write_scalar(&self.a);
        writer.write_scalar(&self.b);
        self.challenges.iter().for_each(|c| writer.write_scalar(c));
    }

    /// Read one proof from `reader`
    pub fn read_from(reader: &mut ByteReader<'_>) -> BulletproofsResult<Self> {
        let num_rounds = reader.read_u32()? as usize;
        if num_rounds > MAX_ROUNDS {
            return Err(BulletproofsError::SerializationError(format!(
                "{} rounds exceeds the maximum of {}",
                num_rounds, MAX_ROUNDS
            )));
        }

        let l_vec = reader.read_points(num_rounds)?;
        let r_vec = reader.read_points(num_rounds)?;
        let a = reader.read_scalar()?;
        let b = reader.read_scalar()?;
        let challenges = reader.read_scalars(num_rounds + 1)?;

        Ok(Self {
            l_vec,
            r_vec,
            a,
            b,
            challenges,
        })
    }

    /// Serialize proof to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        self.write_to(&mut writer);
        writer.into_bytes()
    }

    /// Deserialize proof from bytes
    pub fn from_bytes(bytes: &[u8]) -> BulletproofsResult<Self> {
        let mut reader = ByteReader::new(bytes);
        let proof = Self::read_from(&mut reader)?;
        reader.finish()?;
        Ok(proof)
    }
}
