//! Cycles-per-Byte Benchmark: Randen
//!
//! Measures output cost using hardware cycle counters (RDTSC).

#![allow(unsafe_code)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]

#[cfg(target_arch = "x86_64")]
mod cpb {
    use randen::{Backend, Randen, SEED_BYTES};
    use std::arch::x86_64::_rdtsc;
    use std::hint::black_box;

    // =========================================================================
    // UTILITIES
    // =========================================================================

    /// Measure RDTSC overhead to subtract from measurements.
    fn measure_overhead(iterations: u64) -> f64 {
        let start = unsafe { _rdtsc() };
        for _ in 0..iterations {
            black_box(0);
        }
        let end = unsafe { _rdtsc() };
        (end - start) as f64 / iterations as f64
    }

    // =========================================================================
    // MEASUREMENT
    // =========================================================================

    fn measure(rng: &mut Randen, out: &mut [u8], iterations: u64) -> f64 {
        // Warm up caches and the branch predictor.
        for _ in 0..16 {
            rng.generate(out);
        }

        let start = unsafe { _rdtsc() };
        for _ in 0..iterations {
            rng.generate(black_box(&mut *out));
        }
        let end = unsafe { _rdtsc() };
        (end - start) as f64 / iterations as f64
    }

    pub fn run() {
        let overhead = measure_overhead(1_000_000);
        let sizes = [240usize, 4096, 65536];

        println!("{:<22} {:>8} {:>10}", "Backend", "Bytes", "cycles/B");
        println!("{}", "-".repeat(42));

        for backend in Backend::ALL {
            let Ok(mut rng) = Randen::with_backend(&[0u8; SEED_BYTES], backend) else {
                continue;
            };
            for size in sizes {
                let mut out = vec![0u8; size];
                let iterations = (4_000_000 / size as u64).max(100);
                let cycles = measure(&mut rng, &mut out, iterations) - overhead;
                println!("{:<22} {:>8} {:>10.2}", backend.name(), size, cycles / size as f64);
            }
        }
    }
}

fn main() {
    #[cfg(target_arch = "x86_64")]
    cpb::run();

    #[cfg(not(target_arch = "x86_64"))]
    eprintln!("bench_cpb needs RDTSC (x86_64 only)");
}
