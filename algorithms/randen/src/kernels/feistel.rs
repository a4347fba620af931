//! Randen Permutation
//!
//! 17 rounds of a 16-branch generalized Feistel network. Each round pairs
//! block `2i` with block `2i + 1` and computes
//!
//! ```text
//! odd' = AESENC(AESENC(even, key), odd)  =  F(even) ^ odd
//! ```
//!
//! so the even block drives a two-round AES function whose output is XORed
//! into the odd block (the final AddRoundKey does the XOR). A block shuffle
//! then gives every branch a new partner for the next round.

use super::constants::{Block, FEISTEL_BLOCKS, FEISTEL_FUNCTIONS, FEISTEL_ROUNDS, ROUND_KEYS, SHUFFLE};
use super::{StateBuffer, VectorEngine};

/// Permute `state` in place.
///
/// Keys are consumed strictly in table order, eight per round. The loop
/// structure depends only on constants, never on state contents.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn permute<E: VectorEngine>(engine: E, state: &mut StateBuffer) {
    let round_keys = ROUND_KEYS.blocks().chunks_exact(FEISTEL_FUNCTIONS);
    debug_assert_eq!(round_keys.len(), FEISTEL_ROUNDS);

    for keys in round_keys {
        for function in 0..FEISTEL_FUNCTIONS {
            let branch = 2 * function;
            let even = engine.load(&state.blocks, branch);
            let odd = engine.load(&state.blocks, branch + 1);
            let f1 = engine.aes_round(even, engine.load(keys, function));
            let f2 = engine.aes_round(f1, odd);
            engine.store(f2, &mut state.blocks, branch + 1);
        }
        block_shuffle(engine, &mut state.blocks);
    }
}

/// Rearrange blocks so that new block `b` is old block `SHUFFLE[b]`.
///
/// Every destination is read from an untouched snapshot.
#[allow(clippy::inline_always)]
#[inline(always)]
fn block_shuffle<E: VectorEngine>(engine: E, blocks: &mut [Block; FEISTEL_BLOCKS]) {
    let source = *blocks;
    for (branch, &from) in SHUFFLE.iter().enumerate() {
        let v = engine.load(&source, from);
        engine.store(v, blocks, branch);
    }
}
