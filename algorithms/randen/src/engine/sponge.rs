//! Sponge Primitives
//!
//! The state is one capacity block followed by fifteen rate blocks.
//! `absorb` only ever touches the rate; `generate` is the only writer of the
//! capacity and feeds its previous value forward so that the permutation
//! cannot be run backwards from a captured state.

use super::dispatcher::PermuteFn;
use crate::kernels::constants::{BLOCK_BYTES, CAPACITY_BLOCKS};
use crate::kernels::StateBuffer;
use crate::types::Seed;

/// XOR `seed` into the rate, one 128-bit block at a time.
pub fn absorb(state: &mut StateBuffer, seed: &Seed) {
    let rate = &mut state.blocks[CAPACITY_BLOCKS..];
    for (block, chunk) in rate.iter_mut().zip(seed.chunks_exact(BLOCK_BYTES)) {
        let mut input = [0u8; BLOCK_BYTES];
        input.copy_from_slice(chunk);
        let mixed = u128::from_ne_bytes(*block) ^ u128::from_ne_bytes(input);
        *block = mixed.to_ne_bytes();
    }
}

/// Permute the whole state and feed the old capacity forward into the new.
pub fn generate(state: &mut StateBuffer, permute: PermuteFn) {
    let prev_inner = u128::from_ne_bytes(state.blocks[0]);
    permute(state);
    let inner = u128::from_ne_bytes(state.blocks[0]) ^ prev_inner;
    state.blocks[0] = inner.to_ne_bytes();
}
