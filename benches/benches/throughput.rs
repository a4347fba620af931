//! Randen Criterion Benchmark
//!
//! Output throughput across read sizes, plus reseed cost and a comparison
//! against the `rand` crate's default CSPRNG.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use randen::{Randen, SEED_BYTES};
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

// =============================================================================
// BENCHMARK 1: SINGLE BYTES
// =============================================================================

/// Hot path latency of the byte-at-a-time interface.
fn bench_generate_byte(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Generate-Byte");
    group.throughput(Throughput::Bytes(1));

    let mut rng = Randen::new(&[0u8; SEED_BYTES]);
    group.bench_function("generate_byte", |b| b.iter(|| black_box(rng.generate_byte())));

    let mut rng = Randen::new(&[0u8; SEED_BYTES]);
    group.bench_function("next_u64", |b| b.iter(|| black_box(rng.next_u64())));
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK OUTPUT
// =============================================================================

/// Throughput of `generate` for buffer sizes around and far above one batch.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");

    let sizes = [
        (16, "16B"),
        (240, "240B"),
        (241, "241B"),
        (4 * KB, "4KB"),
        (64 * KB, "64KB"),
        (MB, "1MB"),
    ];

    for (size, name) in sizes {
        let mut out = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        let mut rng = Randen::new(&[0u8; SEED_BYTES]);
        group.bench_function(BenchmarkId::new("Randen", name), |b| {
            b.iter(|| rng.generate(black_box(&mut out)));
        });

        let mut std_rng = StdRng::seed_from_u64(0);
        group.bench_function(BenchmarkId::new("StdRng", name), |b| {
            b.iter(|| std_rng.fill_bytes(black_box(&mut out)));
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: RESEED
// =============================================================================

/// Cost of absorbing a seed (XOR only, no permutation).
fn bench_reseed(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Reseed");
    group.throughput(Throughput::Bytes(SEED_BYTES as u64));

    let mut rng = Randen::new(&[0u8; SEED_BYTES]);
    let seed = [0x5Au8; SEED_BYTES];
    group.bench_function("reseed", |b| b.iter(|| rng.reseed(black_box(&seed))));
    group.finish();
}

criterion_group!(benches, bench_generate_byte, bench_bulk, bench_reseed);
criterion_main!(benches);
