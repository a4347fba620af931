//! Generator for Randen test vectors
//!
//! Regenerates `tests/test_vectors.json` from this implementation so it can be
//! diffed against the file produced by `scripts/randen_reference.py`.
//! Covers short reads, exact batch boundaries, and reseeds mid-batch.
#![allow(clippy::unwrap_used)]
#![allow(clippy::pedantic, clippy::nursery)]

use randen::kernels::{portable, StateBuffer};
use randen::{Backend, Randen, Seed, SEED_BYTES, STATE_BYTES};
use serde_json::{json, Value};

fn seed_pattern(name: &str) -> Seed {
    match name {
        "zero" => [0u8; SEED_BYTES],
        "ones" => [0xFFu8; SEED_BYTES],
        "counter" => core::array::from_fn(|i| i as u8),
        other => panic!("unknown seed pattern {other}"),
    }
}

fn vector(name: &str, seed: &str, length: usize, reseed: Option<(usize, &str)>) -> Value {
    let mut rng = Randen::with_backend(&seed_pattern(seed), Backend::Portable).unwrap();
    let mut out = vec![0u8; length];

    let Some((after, reseed_seed)) = reseed else {
        rng.generate(&mut out);
        return json!({
            "name": name,
            "seed": seed,
            "length": length,
            "permutations": rng.permutations(),
            "output": hex::encode(&out)
        });
    };

    let (head, tail) = out.split_at_mut(after);
    rng.generate(head);
    rng.reseed(&seed_pattern(reseed_seed));
    rng.generate(tail);
    json!({
        "name": name,
        "seed": seed,
        "length": length,
        "permutations": rng.permutations(),
        "reseed": { "after": after, "seed": reseed_seed },
        "output": hex::encode(&out)
    })
}

fn main() {
    // =========================================================================
    // 1. RAW PERMUTATION
    // =========================================================================

    let mut state = StateBuffer::from_bytes(&[0u8; STATE_BYTES]);
    portable::permute(&mut state);
    let permutation = json!({ "input": "zero", "output": hex::encode(state.as_bytes()) });

    // =========================================================================
    // 2. STREAM VECTORS
    // =========================================================================

    let vectors = vec![
        vector("zero_seed_5_bytes", "zero", 5, None),
        // Exactly one batch
        vector("zero_seed_240_bytes", "zero", 240, None),
        // First byte of the second batch
        vector("zero_seed_241_bytes", "zero", 241, None),
        vector("zero_seed_512_bytes", "zero", 512, None),
        vector("ones_seed_64_bytes", "ones", 64, None),
        vector("counter_seed_300_bytes", "counter", 300, None),
        // =====================================================================
        // 3. RESEED SCENARIOS
        // =====================================================================
        vector("zero_seed_reseed_counter_after_100", "zero", 400, Some((100, "counter"))),
        vector("ones_seed_reseed_zero_after_17", "ones", 300, Some((17, "zero"))),
        // Reseed lands exactly on a batch boundary
        vector("counter_seed_reseed_ones_after_240", "counter", 241, Some((240, "ones"))),
    ];

    let output = json!({ "permutation": permutation, "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
