//! Backend Comparison Benchmark
//!
//! Compares the runtime dispatcher against the explicit AES-NI, NEON and
//! portable permutation kernels.

#![allow(missing_docs)]
#![allow(unsafe_code)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use randen::kernels::{self, StateBuffer};
use randen::{Backend, Randen, SEED_BYTES, STATE_BYTES};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Randen Permutation");
    group.throughput(Throughput::Bytes(STATE_BYTES as u64));

    let mut state = StateBuffer::zero();

    // 1. AES-NI - Explicit kernel (bypasses dispatcher)
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        if Backend::AesNi.is_available() {
            group.bench_function("AES-NI Native", |b| {
                b.iter(|| unsafe { kernels::aesni::permute(black_box(&mut state)) });
            });
        }
    }

    // 2. NEON - Explicit kernel
    #[cfg(target_arch = "aarch64")]
    {
        if Backend::Neon.is_available() {
            group.bench_function("NEON Native", |b| {
                b.iter(|| unsafe { kernels::neon::permute(black_box(&mut state)) });
            });
        }
    }

    // 3. Portable - constant-time software AES
    // Baseline to quantify the speedup from hardware acceleration
    group.bench_function("Portable (No SIMD)", |b| {
        b.iter(|| kernels::portable::permute(black_box(&mut state)));
    });
    group.finish();
}

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("Randen Backends");
    let size = 64 * 1024;
    let mut out = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    // Production path: dispatcher picks the kernel once at construction.
    let mut rng = Randen::new(&[0u8; SEED_BYTES]);
    group.bench_function(format!("Auto ({})", rng.backend()), |b| {
        b.iter(|| rng.generate(black_box(&mut out)));
    });

    for backend in Backend::ALL {
        let Ok(mut rng) = Randen::with_backend(&[0u8; SEED_BYTES], backend) else {
            continue;
        };
        group.bench_function(backend.name(), |b| {
            b.iter(|| rng.generate(black_box(&mut out)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_permutation, bench_generators);
criterion_main!(benches);
