//! AES-NI Kernel Module
//!
//! Hardware AES-instruction engine: one `AESENC` per AES round.

#[cfg(target_arch = "x86")]
use core::arch::x86::{__m128i, _mm_aesenc_si128, _mm_loadu_si128, _mm_storeu_si128};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{__m128i, _mm_aesenc_si128, _mm_loadu_si128, _mm_storeu_si128};

use crate::kernels::constants::Block;
use crate::kernels::{feistel, StateBuffer, VectorEngine};

// =============================================================================
// ENGINE
// =============================================================================

/// AES-NI vector engine. Holding a value proves AES + SSE2 are available.
#[derive(Clone, Copy, Debug)]
pub struct AesNi {
    _private: (),
}

impl AesNi {
    /// Create the engine without checking the CPU.
    ///
    /// # Safety
    /// The CPU must support the `aes` and `sse2` target features.
    #[allow(unsafe_code)]
    pub const unsafe fn new_unchecked() -> Self {
        Self { _private: () }
    }
}

#[allow(unsafe_code)]
impl VectorEngine for AesNi {
    type Vector = __m128i;

    #[allow(clippy::inline_always)]
    #[inline(always)]
    fn load(self, blocks: &[Block], index: usize) -> __m128i {
        let block = &blocks[index];
        // SAFETY: `self` proves SSE2. `block` is 16 readable bytes; the load is unaligned.
        unsafe { _mm_loadu_si128(block.as_ptr().cast()) }
    }

    #[allow(clippy::inline_always)]
    #[inline(always)]
    fn store(self, v: __m128i, blocks: &mut [Block], index: usize) {
        let block = &mut blocks[index];
        // SAFETY: `self` proves SSE2. `block` is 16 writable bytes; the store is unaligned.
        unsafe { _mm_storeu_si128(block.as_mut_ptr().cast(), v) }
    }

    #[allow(clippy::inline_always)]
    #[inline(always)]
    fn aes_round(self, state: __m128i, round_key: __m128i) -> __m128i {
        // SAFETY: `self` proves AES-NI.
        unsafe { _mm_aesenc_si128(state, round_key) }
    }
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Run the Randen permutation with AES-NI.
///
/// # Safety
/// The CPU must support the `aes` and `sse2` target features.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn permute(state: &mut StateBuffer) {
    // SAFETY: the target features above are guaranteed by the caller.
    let engine = unsafe { AesNi::new_unchecked() };
    feistel::permute(engine, state);
}
