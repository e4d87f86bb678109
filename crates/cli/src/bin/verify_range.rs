//! CLI tool for verifying aggregated range proofs

use anyhow::Context;
use bulletproofs_cli::common::{
    decode_proof, default_parameters, init_tracing, read_input, ProofFormat,
};
use clap::Parser;
use range::RangeVerifier;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "verify-range")]
#[command(about = "Verify an aggregated range proof")]
struct Args {
    /// Input file containing the proof (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Read the proof as JSON instead of hex
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let input = read_input(args.input.as_deref()).context("failed to read proof")?;
    let proof = decode_proof(&input, ProofFormat::from_json_flag(args.json))
        .context("failed to parse proof")?;
    info!(m = proof.aggregation_size(), "proof parsed");

    let verifier = RangeVerifier::new(default_parameters()?);
    match verifier.verify_range_detailed(&proof) {
        Ok(()) => {
            println!("VALID");
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "proof rejected");
            println!("INVALID");
            std::process::exit(1);
        }
    }
}
