//! Canonical fixed-width byte encoding for proof components
//!
//! Points are written as 32-byte compressed Ristretto encodings, scalars as
//! 32-byte big-endian integers below the group order, counts as `u32` LE.

use crate::{
    group::{scalar_from_be_bytes_canonical, scalar_to_be_bytes, ENCODING_WIDTH},
    BulletproofsError, BulletproofsResult,
};
use curve25519_dalek::{ristretto::CompressedRistretto, scalar::Scalar};

/// Append-only writer
#[derive(Debug, Default)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_u32(&mut self, value: u32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_point(&mut self, point: &CompressedRistretto) {
        self.bytes.extend_from_slice(point.as_bytes());
    }

    pub fn write_scalar(&mut self, scalar: &Scalar) {
        self.bytes.extend_from_slice(&scalar_to_be_bytes(scalar));
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Cursor over an encoded proof
#[derive(Debug)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn take(&mut self, len: usize) -> BulletproofsResult<&'a [u8]> {
        let end = self
            .offset
            .checked_add(len)
            .filter(|end| *end <= self.bytes.len())
            .ok_or_else(|| {
                BulletproofsError::SerializationError(format!(
                    "need {} bytes at offset {}, have {}",
                    len,
                    self.offset,
                    self.bytes.len()
                ))
            })?;
        let slice = &self.bytes[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    fn take_array(&mut self) -> BulletproofsResult<[u8; ENCODING_WIDTH]> {
        let mut out = [0u8; ENCODING_WIDTH];
        out.copy_from_slice(self.take(ENCODING_WIDTH)?);
        Ok(out)
    }

    pub fn read_u32(&mut self) -> BulletproofsResult<u32> {
        let mut out = [0u8; 4];
        out.copy_from_slice(self.take(4)?);
        Ok(u32::from_le_bytes(out))
    }

    /// Reads the point encoding without decompressing it
    pub fn read_point(&mut self) -> BulletproofsResult<CompressedRistretto> {
        Ok(CompressedRistretto(self.take_array()?))
    }

    pub fn read_points(&mut self, count: usize) -> BulletproofsResult<Vec<CompressedRistretto>> {
        (0..count).map(|_| self.read_point()).collect()
    }

    pub fn read_scalar(&mut self) -> BulletproofsResult<Scalar> {
        let bytes = self.take_array()?;
        scalar_from_be_bytes_canonical(&bytes).ok_or_else(|| {
            BulletproofsError::SerializationError("non-canonical scalar".to_string())
        })
    }

    pub fn read_scalars(&mut self, count: usize) -> BulletproofsResult<Vec<Scalar>> {
        (0..count).map(|_| self.read_scalar()).collect()
    }

    /// Fails if any input is left unread
    pub fn finish(self) -> BulletproofsResult<()> {
        if self.offset != self.bytes.len() {
            return Err(BulletproofsError::SerializationError(format!(
                "{} trailing bytes",
                self.bytes.len() - self.offset
            )));
        }
        Ok(())
    }
}
