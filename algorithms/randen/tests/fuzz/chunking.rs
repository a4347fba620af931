use bolero::check;
use randen::{Backend, Randen, SEED_BYTES};

/// Output must not depend on how reads are split.
#[test]
fn fuzz_chunking_consistency() {
    check!()
        .with_type::<(u8, Vec<u16>)>()
        .for_each(|(seed_byte, chunks)| {
            let seed = [*seed_byte; SEED_BYTES];
            let sizes: Vec<usize> = chunks.iter().map(|c| usize::from(*c % 600)).collect();
            let total: usize = sizes.iter().sum();

            // =================================================================
            // BASELINE (ONE BULK READ)
            // =================================================================
            let mut expected = vec![0u8; total];
            let mut baseline = Randen::new(&seed);
            baseline.generate(&mut expected);

            // =================================================================
            // CHUNKED READS
            // =================================================================
            let mut rng = Randen::new(&seed);
            let mut out = Vec::with_capacity(total);
            for size in &sizes {
                let mut buf = vec![0u8; *size];
                rng.generate(&mut buf);
                out.extend_from_slice(&buf);
            }
            assert_eq!(out, expected, "Chunked output mismatch");
            assert_eq!(rng.permutations(), baseline.permutations());
            assert_eq!(rng.buffered(), baseline.buffered());
        });
}

/// The auto-selected backend must agree with the portable one.
#[test]
fn fuzz_backend_agreement() {
    check!()
        .with_type::<(Vec<u8>, u16)>()
        .for_each(|(seed_bytes, len)| {
            let mut seed = [0u8; SEED_BYTES];
            for (dst, src) in seed.iter_mut().zip(seed_bytes) {
                *dst = *src;
            }
            let len = usize::from(*len % 2048);

            let mut auto = Randen::new(&seed);
            let Ok(mut portable) = Randen::with_backend(&seed, Backend::Portable) else {
                return;
            };

            let mut a = vec![0u8; len];
            let mut b = vec![0u8; len];
            auto.generate(&mut a);
            portable.generate(&mut b);
            assert_eq!(a, b, "{} diverged from Portable", auto.backend());
        });
}
