//! Benchmarks for inner product argument

use bulletproofs_core::{
    bulletproofs_transcript, commitment::two_vector_commit, utils::{inner_product, rand_vector},
    GroupParameters,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ipa::{InnerProductProver, InnerProductVerifier};
use rand::thread_rng;

fn bench_ipa_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ipa_generation");

    for vector_length in [64usize, 128, 256, 512] {
        group.throughput(Throughput::Elements(vector_length as u64));

        let mut rng = thread_rng();
        let params = GroupParameters::new(vector_length).unwrap();
        let prover = InnerProductProver::new(&params).unwrap();
        let a = rand_vector(vector_length, &mut rng).unwrap();
        let b = rand_vector(vector_length, &mut rng).unwrap();
        let p = two_vector_commit(&a, &b, &params.g_vec, &params.h_vec).unwrap();
        let ip = inner_product(&a, &b).unwrap();

        group.bench_with_input(BenchmarkId::new("prove", vector_length), &vector_length, |bench, _| {
            bench.iter(|| {
                let mut transcript = bulletproofs_transcript(b"ipa_benchmark");
                let proof = prover
                    .prove(&mut transcript, &p, &ip, black_box(&a), black_box(&b))
                    .unwrap();
                black_box(proof)
            });
        });
    }

    group.finish();
}

fn bench_ipa_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("ipa_verification");

    for vector_length in [64usize, 128, 256, 512] {
        group.throughput(Throughput::Elements(vector_length as u64));

        let mut rng = thread_rng();
        let params = GroupParameters::new(vector_length).unwrap();
        let a = rand_vector(vector_length, &mut rng).unwrap();
        let b = rand_vector(vector_length, &mut rng).unwrap();
        let p = two_vector_commit(&a, &b, &params.g_vec, &params.h_vec).unwrap();
        let ip = inner_product(&a, &b).unwrap();
        let proof = InnerProductProver::new(&params)
            .unwrap()
            .prove(&mut bulletproofs_transcript(b"ipa_benchmark"), &p, &ip, &a, &b)
            .unwrap();
        let verifier = InnerProductVerifier::new(&params).unwrap();

        group.bench_with_input(BenchmarkId::new("verify", vector_length), &proof, |bench, proof| {
            bench.iter(|| {
                let mut transcript = bulletproofs_transcript(b"ipa_benchmark");
                assert!(verifier.verify(&mut transcript, black_box(proof), &p, &ip));
            });
        });

        group.bench_with_input(BenchmarkId::new("verify_fast", vector_length), &proof, |bench, proof| {
            bench.iter(|| {
                let mut transcript = bulletproofs_transcript(b"ipa_benchmark");
                assert!(verifier.verify_fast(&mut transcript, black_box(proof), &p, &ip));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ipa_generation, bench_ipa_verification);
criterion_main!(benches);
