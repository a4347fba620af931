//! ARMv8 Crypto Kernel Module
//!
//! Composed engine: `AESE` (AddRoundKey, SubBytes, ShiftRows) chained with
//! `AESMC` (MixColumns).
//!
//! `AESE` XORs its key *before* the S-box, whereas `AESENC` XORs it after
//! MixColumns. Feeding the round key into `AESE` would therefore compute a
//! different function. The key goes in as zero and is XORed after `AESMC`:
//!
//! ```text
//! AESENC(s, k) = AESMC(AESE(s, 0)) ^ k
//! ```

use core::arch::aarch64::{uint8x16_t, vaeseq_u8, vaesmcq_u8, vdupq_n_u8, veorq_u8, vld1q_u8, vst1q_u8};

use crate::kernels::constants::Block;
use crate::kernels::{feistel, StateBuffer, VectorEngine};

// =============================================================================
// ENGINE
// =============================================================================

/// NEON + AES vector engine. Holding a value proves `neon` and `aes`.
#[derive(Clone, Copy, Debug)]
pub struct Neon {
    _private: (),
}

impl Neon {
    /// Create the engine without checking the CPU.
    ///
    /// # Safety
    /// The CPU must support the `neon` and `aes` target features.
    #[allow(unsafe_code)]
    pub const unsafe fn new_unchecked() -> Self {
        Self { _private: () }
    }
}

#[allow(unsafe_code)]
impl VectorEngine for Neon {
    type Vector = uint8x16_t;

    #[allow(clippy::inline_always)]
    #[inline(always)]
    fn load(self, blocks: &[Block], index: usize) -> uint8x16_t {
        let block = &blocks[index];
        // SAFETY: `self` proves NEON. `block` is 16 readable bytes.
        unsafe { vld1q_u8(block.as_ptr()) }
    }

    #[allow(clippy::inline_always)]
    #[inline(always)]
    fn store(self, v: uint8x16_t, blocks: &mut [Block], index: usize) {
        let block = &mut blocks[index];
        // SAFETY: `self` proves NEON. `block` is 16 writable bytes.
        unsafe { vst1q_u8(block.as_mut_ptr(), v) }
    }

    #[allow(clippy::inline_always)]
    #[inline(always)]
    fn aes_round(self, state: uint8x16_t, round_key: uint8x16_t) -> uint8x16_t {
        // SAFETY: `self` proves NEON + AES.
        unsafe { veorq_u8(vaesmcq_u8(vaeseq_u8(state, vdupq_n_u8(0))), round_key) }
    }
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Run the Randen permutation with the ARMv8 crypto extension.
///
/// # Safety
/// The CPU must support the `neon` and `aes` target features.
#[target_feature(enable = "neon")]
#[target_feature(enable = "aes")]
#[allow(unsafe_code)]
pub unsafe fn permute(state: &mut StateBuffer) {
    // SAFETY: the target features above are guaranteed by the caller.
    let engine = unsafe { Neon::new_unchecked() };
    feistel::permute(engine, state);
}
