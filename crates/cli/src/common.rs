//! Common utilities for CLI tools

use crate::{CliError, Result};
use bulletproofs_core::GroupParameters;
use range::{max_generators, MultiRangeProof};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Encodings a proof can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofFormat {
    /// Hex of the canonical byte encoding
    Hex,
    /// `serde_json` rendering of the proof struct
    Json,
}

impl ProofFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            ProofFormat::Json
        } else {
            ProofFormat::Hex
        }
    }
}

/// Install a stderr subscriber honouring `RUST_LOG`, defaulting to
/// `info` or `debug` when verbose.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Parameters large enough for every supported aggregation size
pub fn default_parameters() -> Result<GroupParameters> {
    Ok(GroupParameters::new(max_generators())?)
}

/// Parse a decimal or `0x`-prefixed hex integer, allowing one leading `-`.
///
/// Values are parsed wide so out-of-range inputs reach the prover and are
/// reported as such rather than as parse errors.
pub fn parse_value(input: &str) -> Result<i128> {
    let invalid = || CliError::InvalidValue(input.to_string());
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (radix, digits) = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, digits),
    };
    // from_str_radix accepts its own sign; only the one stripped above is allowed
    if digits.starts_with(['+', '-']) {
        return Err(invalid());
    }

    let magnitude = i128::from_str_radix(digits, radix).map_err(|_| invalid())?;
    if negative {
        magnitude.checked_neg().ok_or_else(invalid)
    } else {
        Ok(magnitude)
    }
}

pub fn encode_proof(proof: &MultiRangeProof, format: ProofFormat) -> Result<String> {
    Ok(match format {
        ProofFormat::Hex => hex::encode(proof.to_bytes()),
        ProofFormat::Json => serde_json::to_string_pretty(proof)?,
    })
}

pub fn decode_proof(input: &str, format: ProofFormat) -> Result<MultiRangeProof> {
    let input = input.trim();
    Ok(match format {
        ProofFormat::Hex => MultiRangeProof::from_bytes(&hex::decode(input)?)?,
        ProofFormat::Json => serde_json::from_str(input)?,
    })
}

/// Read from `path`, or stdin when absent
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Write to `path`, or stdout when absent
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, contents)?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", contents)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use range::RangeProver;
    use rand::thread_rng;

    fn sample_proof() -> MultiRangeProof {
        let params = GroupParameters::for_aggregation(2).unwrap();
        RangeProver::new(params)
            .prove_range(&[5, 10], &mut thread_rng())
            .unwrap()
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("42").unwrap(), 42);
        assert_eq!(parse_value("0x5000000000").unwrap(), 0x5000000000);
        assert_eq!(parse_value("-1").unwrap(), -1);
        assert_eq!(parse_value("18446744073709551616").unwrap(), 1i128 << 64);
        assert!(matches!(parse_value("ten"), Err(CliError::InvalidValue(_))));
        assert!(parse_value("0xzz").is_err());
        assert_eq!(parse_value("0X10").unwrap(), 16);
        assert_eq!(parse_value("-0x10").unwrap(), -16);
    }

    #[test]
    fn test_parse_value_rejects_repeated_signs() {
        for input in ["--5", "-0x-5", "0x+7", "+5", "-+5", "0x-1", "-", "0x", ""] {
            assert!(
                matches!(parse_value(input), Err(CliError::InvalidValue(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_value_extremes() {
        assert_eq!(parse_value("170141183460469231731687303715884105727").unwrap(), i128::MAX);
        // i128::MAX + 1 has no positive magnitude, so its negation is rejected too
        assert!(parse_value("-170141183460469231731687303715884105728").is_err());
        assert!(parse_value("--170141183460469231731687303715884105728").is_err());
    }

    #[test]
    fn test_proof_encodings_round_trip() {
        let proof = sample_proof();

        for format in [ProofFormat::Hex, ProofFormat::Json] {
            let encoded = encode_proof(&proof, format).unwrap();
            assert_eq!(decode_proof(&encoded, format).unwrap(), proof);
        }
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_proof("not hex", ProofFormat::Hex),
            Err(CliError::HexError(_))
        ));
        assert!(matches!(
            decode_proof("00", ProofFormat::Hex),
            Err(CliError::ProofError(_))
        ));
        assert!(matches!(
            decode_proof("{}", ProofFormat::Json),
            Err(CliError::JsonError(_))
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proof.hex");
        let encoded = encode_proof(&sample_proof(), ProofFormat::Hex).unwrap();

        write_output(Some(&path), &encoded).unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), encoded);
    }
}
