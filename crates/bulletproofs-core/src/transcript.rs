//! Transcript management for Fiat-Shamir heuristic
//!
//! Every challenge is squeezed from a [`merlin::Transcript`] that has absorbed
//! all protocol messages so far, in order. Prover and verifier must append the
//! same points in the same sequence for challenges to agree.

use curve25519_dalek::{ristretto::CompressedRistretto, scalar::Scalar};
use merlin::Transcript;

/// Extension trait for Transcript to add Bulletproofs-specific methods
pub trait TranscriptProtocol {
    /// Domain separator for an aggregated range proof over `m` values of `n` bits
    fn rangeproof_domain_sep(&mut self, n: u64, m: u64);

    /// Domain separator for an inner-product argument of length `n`
    fn innerproduct_domain_sep(&mut self, n: u64);

    /// Append a group element to the transcript
    fn append_point(&mut self, label: &'static [u8], point: &CompressedRistretto);

    /// Append a scalar to the transcript
    fn append_scalar(&mut self, label: &'static [u8], scalar: &Scalar);

    /// Challenge scalar from transcript
    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar;
}

impl TranscriptProtocol for Transcript {
    fn rangeproof_domain_sep(&mut self, n: u64, m: u64) {
        self.append_message(b"dom-sep", b"rangeproof v1");
        self.append_u64(b"n", n);
        self.append_u64(b"m", m);
    }

    fn innerproduct_domain_sep(&mut self, n: u64) {
        self.append_message(b"dom-sep", b"ipp v1");
        self.append_u64(b"n", n);
    }

    fn append_point(&mut self, label: &'static [u8], point: &CompressedRistretto) {
        self.append_message(label, point.as_bytes());
    }

    fn append_scalar(&mut self, label: &'static [u8], scalar: &Scalar) {
        self.append_message(label, scalar.as_bytes());
    }

    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar {
        let mut buf = [0u8; 64];
        self.challenge_bytes(label, &mut buf);
        Scalar::from_bytes_mod_order_wide(&buf)
    }
}

/// Create a new transcript for Bulletproofs with domain separation
pub fn bulletproofs_transcript(domain_label: &'static [u8]) -> Transcript {
    let mut transcript = Transcript::new(b"Bulletproofs");
    transcript.append_message(b"domain", domain_label);
    transcript
}
