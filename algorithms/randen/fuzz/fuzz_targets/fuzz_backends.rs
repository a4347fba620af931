#![no_main]

use libfuzzer_sys::fuzz_target;
use randen::kernels::{portable, StateBuffer};
use randen::{Backend, Randen, SEED_BYTES, STATE_BYTES};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // 1. RAW PERMUTATION
    // =============================================================================

    // Capacity stays zero, as it is for a freshly seeded generator.
    let mut seed = [0u8; SEED_BYTES];
    let n = data.len().min(SEED_BYTES);
    seed[..n].copy_from_slice(&data[..n]);

    let mut bytes = [0u8; STATE_BYTES];
    bytes[16..].copy_from_slice(&seed);

    let mut reference = StateBuffer::from_bytes(&bytes);
    portable::permute(&mut reference);

    for backend in Backend::ALL {
        // =========================================================================
        // 2. STREAM AGREEMENT
        // =========================================================================

        let Ok(mut rng) = Randen::with_backend(&seed, backend) else {
            continue;
        };

        let mut out = [0u8; SEED_BYTES];
        rng.generate(&mut out);
        assert_eq!(&out[..], &reference.as_bytes()[16..], "{backend} diverged");
    }
});
