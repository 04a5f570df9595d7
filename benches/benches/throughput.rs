//! wyhash Comprehensive Criterion Benchmark
//!
//! Statistically rigorous performance measurements across all scenarios.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use std::num::NonZeroU64;
use wyhash::{make_secret, wy2gau, wy2u01, wy2u0k, wyhash, wyhash64, wyrand, Secret, WyRng, Wyrand};

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

/// Deterministic filler so runs are comparable.
fn random_input(size: usize, seed: u64) -> Vec<u8> {
    let mut rng = Wyrand::new(seed);
    (0..size).map(|_| rng.next_u64() as u8).collect()
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency across the length regimes (Hash Map keys, IDs).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");
    let secret = Secret::default();

    let sizes = [
        (3, "3B-read3"),
        (8, "8B"),
        (16, "16B"),
        (17, "17B-tail"),
        (48, "48B-block"),
        (64, "64B"),
        (256, "256B"),
    ];

    for (size, name) in sizes {
        let input = random_input(size, size as u64);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| wyhash(black_box(data), 0, &secret)),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK THROUGHPUT
// =============================================================================

/// Throughput for larger buffers (files, network payloads).
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");
    let secret = Secret::default();

    let sizes = [
        (KB, "1KB"),
        (16 * KB, "16KB"),
        (256 * KB, "256KB"),
        (MB, "1MB"),
        (16 * MB, "16MB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size, 1);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| wyhash(black_box(data), 0, &secret)),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: PRNG
// =============================================================================

/// Cost per draw for the generators and mappers.
fn bench_prng(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-PRNG");
    group.throughput(Throughput::Elements(1));

    let mut state = 0u64;
    group.bench_function("wyrand", |b| b.iter(|| wyrand(black_box(&mut state))));

    let mut counter = 0u64;
    group.bench_function("wyhash64", |b| {
        b.iter(|| {
            counter = counter.wrapping_add(1);
            wyhash64(black_box(counter), 0)
        })
    });

    let mut rng = Wyrand::new(0);
    group.bench_function("uniform-f64", |b| b.iter(|| wy2u01(rng.next_u64())));
    group.bench_function("gaussian", |b| b.iter(|| wy2gau(rng.next_u64())));

    let bound = NonZeroU64::new(1_000_003).unwrap();
    group.bench_function("bounded-range", |b| {
        b.iter(|| wy2u0k(rng.next_u64(), black_box(bound)))
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 4: SPECIAL OPERATIONS
// =============================================================================

/// Secret generation and keyed hashing with a custom secret.
fn bench_special_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Special-Operations");
    group.sample_size(20); // The last secret word dominates: thousands of draws

    let mut seed = 0u64;
    group.bench_function("make-secret", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            make_secret(black_box(seed))
        })
    });

    let custom = make_secret(42);
    let input = random_input(64 * KB, 2);
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("custom-secret-64KB", |b| {
        b.iter(|| wyhash(black_box(&input), 0, &custom))
    });

    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_bulk,
    bench_prng,
    bench_special_operations,
);

criterion_main!(benches);
