//! CLI tool for proving that values lie in [0, 2^64)

use anyhow::Context;
use bulletproofs_cli::common::{
    default_parameters, encode_proof, init_tracing, parse_value, write_output, ProofFormat,
};
use clap::Parser;
use range::RangeProver;
use rand::thread_rng;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "prove-range")]
#[command(about = "Generate an aggregated range proof for 1, 2, 4 or 8 values")]
struct Args {
    /// A value to prove is in range; repeat for aggregation
    #[arg(
        long = "value",
        required = true,
        num_args = 1..,
        allow_negative_numbers = true,
        value_parser = parse_value
    )]
    values: Vec<i128>,

    /// Output file for the proof (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the proof as JSON instead of hex
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let prover = RangeProver::new(default_parameters()?);
    let proof = prover
        .prove_range_checked(&args.values, &mut thread_rng())
        .context("failed to generate proof")?;
    info!(m = proof.aggregation_size(), bytes = proof.size_bytes(), "proof generated");

    let encoded = encode_proof(&proof, ProofFormat::from_json_flag(args.json))?;
    write_output(args.output.as_deref(), &encoded)?;
    if let Some(path) = &args.output {
        info!(path = %path.display(), "proof written");
    }

    Ok(())
}
