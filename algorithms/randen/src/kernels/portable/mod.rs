//! Portable implementation of Randen.
//!
//! Pure Rust, no SIMD, no lookup tables. Produces byte-identical output to
//! the AES-NI and NEON engines and runs on every target.

use self::utils::{aesenc, U128};
use crate::kernels::constants::Block;
use crate::kernels::{feistel, StateBuffer, VectorEngine};

mod utils;

// =============================================================================
// ENGINE
// =============================================================================

/// Software vector engine. Always available.
#[derive(Clone, Copy, Debug, Default)]
pub struct Portable;

impl VectorEngine for Portable {
    type Vector = U128;

    #[inline]
    fn load(self, blocks: &[Block], index: usize) -> U128 {
        U128::from_block(blocks[index])
    }

    #[inline]
    fn store(self, v: U128, blocks: &mut [Block], index: usize) {
        blocks[index] = v.b;
    }

    #[inline]
    fn aes_round(self, state: U128, round_key: U128) -> U128 {
        aesenc(state, round_key)
    }
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Run the Randen permutation in software.
pub fn permute(state: &mut StateBuffer) {
    feistel::permute(Portable, state);
}
