//! Baseline Comparison Benchmark
//!
//! Hashes a corpus of 100,000 random inputs (0 to 299 bytes) with wyhash and
//! with common baselines: XXH3 (non-cryptographic peer), SHA-256 and BLAKE3
//! (cryptographic reference points).

#![allow(missing_docs)]
#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use sha2::{Digest, Sha256};
use std::hint::black_box;
use wyhash::{Secret, WyRng, Wyhash, Wyrand};

const CORPUS_SIZE: usize = 100_000;
const MAX_LEN: u64 = 300;

fn corpus() -> Vec<Vec<u8>> {
    let mut rng = Wyrand::new(42);
    let mut inputs = vec![b"".to_vec(), b"a".to_vec(), b"abc".to_vec()];
    inputs.extend((0..CORPUS_SIZE).map(|_| {
        let len = rng.next_below(MAX_LEN).unwrap();
        (0..len).map(|_| rng.next_u64() as u8).collect()
    }));
    inputs
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_corpus(c: &mut Criterion) {
    let mut group = c.benchmark_group("Corpus-Mixed-Lengths");
    group.sample_size(20);

    let inputs = corpus();
    let total: usize = inputs.iter().map(Vec::len).sum();
    group.throughput(Throughput::Bytes(total as u64));

    // 1. wyhash (default secret, seed 42)
    let wy = Wyhash::new(42);
    group.bench_function("wyhash", |b| {
        b.iter(|| inputs.iter().fold(0u64, |acc, i| acc ^ wy.hash(black_box(i))))
    });

    // 2. XXH3-64
    group.bench_function("xxh3-64", |b| {
        b.iter(|| {
            inputs.iter().fold(0u64, |acc, i| {
                acc ^ xxhash_rust::xxh3::xxh3_64_with_seed(black_box(i), 42)
            })
        })
    });

    // 3. SHA-256
    group.bench_function("sha256", |b| {
        b.iter(|| {
            for i in &inputs {
                black_box(Sha256::digest(black_box(i)));
            }
        })
    });

    // 4. BLAKE3
    group.bench_function("blake3", |b| {
        b.iter(|| {
            for i in &inputs {
                black_box(blake3::hash(black_box(i)));
            }
        })
    });

    group.finish();
}

#[cfg(feature = "multithread")]
fn bench_corpus_parallel(c: &mut Criterion) {
    use rayon::prelude::*;

    let mut group = c.benchmark_group("Corpus-Parallel");
    group.sample_size(20);

    let inputs = corpus();
    let secret = Secret::default();
    group.throughput(Throughput::Elements(inputs.len() as u64));

    group.bench_function("wyhash-sequential", |b| {
        b.iter(|| {
            inputs
                .iter()
                .map(|i| wyhash::wyhash(black_box(i), 0, &secret))
                .collect::<Vec<_>>()
        })
    });

    // Pure function with a shared read-only secret: no coordination needed
    group.bench_function("wyhash-rayon", |b| {
        b.iter(|| {
            inputs
                .par_iter()
                .map(|i| wyhash::wyhash(black_box(i), 0, &secret))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_corpus);

#[cfg(feature = "multithread")]
criterion_group!(benches_multithread, bench_corpus_parallel);

#[cfg(feature = "multithread")]
criterion_main!(benches, benches_multithread);

#[cfg(not(feature = "multithread"))]
criterion_main!(benches);
