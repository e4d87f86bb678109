//! Aggregated range proof structure and serialization

use bulletproofs_core::{
    encoding::{ByteReader, ByteWriter},
    BulletproofsError, BulletproofsResult, CompressedRistretto, GroupElement, Scalar,
};
use ipa::InnerProductProof;
use serde::{Deserialize, Serialize};

/// A proof that each of `m` committed values lies in `[0, 2^64)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiRangeProof {
    /// Pedersen commitment `V_j = G·v_j + H·γ_j` to each value
    pub commitments: Vec<CompressedRistretto>,
    /// Commitment to the bit vectors `a_L`, `a_R`
    pub a: CompressedRistretto,
    /// Commitment to the blinding vectors `s_L`, `s_R`
    pub s: CompressedRistretto,
    /// Commitment to `t_1`
    pub t1: CompressedRistretto,
    /// Commitment to `t_2`
    pub t2: CompressedRistretto,
    /// Blinding of `t(x)`
    pub tau: Scalar,
    /// `t(x) = <l(x), r(x)>`
    pub th: Scalar,
    /// Blinding of `A + x·S`
    pub mu: Scalar,
    /// Inner product argument for `<l, r> = th`
    pub ipp: InnerProductProof,
    /// Challenge `y`, derived after `A`
    pub cy: Scalar,
    /// Challenge `z`, derived after `S`
    pub cz: Scalar,
    /// Challenge `x`, derived after `T1` and `T2`
    pub cx: Scalar,
}

impl MultiRangeProof {
    /// Number of values proven
    pub fn aggregation_size(&self) -> usize {
        self.commitments.len()
    }

    /// Decompress the value commitments
    pub fn value_commitments(&self) -> BulletproofsResult<Vec<GroupElement>> {
        self.commitments
            .iter()
            .map(GroupElement::from_compressed)
            .collect()
    }

    /// Encoded size in bytes
    pub fn size_bytes(&self) -> usize {
        4 + 32 * (self.commitments.len() + 4) + 32 * 6 + self.ipp.size_bytes()
    }

    /// Serialize proof to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        writer.write_u32(self.commitments.len() as u32);
        self.commitments.iter().for_each(|v| writer.write_point(v));
        for point in [&self.a, &self.s, &self.t1, &self.t2] {
            writer.write_point(point);
        }
        for scalar in [&self.tau, &self.th, &self.mu, &self.cy, &self.cz, &self.cx] {
            writer.write_scalar(scalar);
        }
        self.ipp.write_to(&mut writer);
        writer.into_bytes()
    }

    /// Deserialize proof from bytes
    ///
    /// Points are not decompressed here; verification rejects invalid encodings.
    pub fn from_bytes(bytes: &[u8]) -> BulletproofsResult<Self> {
        let mut reader = ByteReader::new(bytes);

        let m = reader.read_u32()? as usize;
        if !crate::SUPPORTED_AGGREGATIONS.contains(&m) {
            return Err(BulletproofsError::SerializationError(format!(
                "unsupported aggregation size {}",
                m
            )));
        }

        let commitments = reader.read_points(m)?;
        let a = reader.read_point()?;
        let s = reader.read_point()?;
        let t1 = reader.read_point()?;
        let t2 = reader.read_point()?;
        let tau = reader.read_scalar()?;
        let th = reader.read_scalar()?;
        let mu = reader.read_scalar()?;
        let cy = reader.read_scalar()?;
        let cz = reader.read_scalar()?;
        let cx = reader.read_scalar()?;
        let ipp = InnerProductProof::read_from(&mut reader)?;
        reader.finish()?;

        Ok(Self {
            commitments,
            a,
            s,
            t1,
            t2,
            tau,
            th,
            mu,
            ipp,
            cy,
            cz,
            cx,
        })
    }
}
