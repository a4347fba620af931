#![no_main]

use libfuzzer_sys::fuzz_target;
use randen::{Randen, SEED_BYTES};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // First 240 bytes seed the generator, the rest drives the read/reseed script.
    let mut seed = [0u8; SEED_BYTES];
    let split = data.len().min(SEED_BYTES);
    seed[..split].copy_from_slice(&data[..split]);
    let script = &data[split..];

    let mut bulk = Randen::new(&seed);
    let mut single = Randen::new(&seed);

    // =============================================================================
    // 1. SCRIPTED READS AND RESEEDS
    // =============================================================================

    for op in script {
        if op & 0x80 != 0 {
            // Reseed with a pattern derived from the opcode.
            let reseed = [op & 0x7F; SEED_BYTES];
            bulk.reseed(&reseed);
            single.reseed(&reseed);
            continue;
        }

        let len = usize::from(*op) * 5;
        let mut a = vec![0u8; len];
        bulk.generate(&mut a);
        let b: Vec<u8> = (0..len).map(|_| single.generate_byte()).collect();
        assert_eq!(a, b, "Bulk and single-byte reads diverged");
    }

    // =============================================================================
    // 2. BOOKKEEPING
    // =============================================================================

    assert_eq!(bulk.permutations(), single.permutations());
    assert_eq!(bulk.buffered(), single.buffered());
    assert!(bulk.buffered() < 240);
});
