//! Kernel Dispatcher
//!
//! Contains the Randen permutation and its hardware-specific vector engines.
//!
//! Every backend runs the same generic [`feistel::permute`]; they differ only
//! in the [`VectorEngine`] that supplies the three 128-bit operations.

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod aesni;
pub mod constants;
pub mod feistel;
#[cfg(target_arch = "aarch64")]
pub mod neon;
pub mod portable;

use self::constants::{Block, FEISTEL_BLOCKS, STATE_BYTES};

// =============================================================================
// VECTOR ENGINE
// =============================================================================

/// Capability contract for the 128-bit operations the permutation needs.
///
/// An engine value is a zero-sized token: it can only be created where its
/// CPU features are known to be present, so the methods are safe to call.
/// All methods are total and branch-free.
pub trait VectorEngine: Copy {
    /// Opaque 128-bit vector.
    type Vector: Copy;

    /// Read block `index` of `blocks`.
    fn load(self, blocks: &[Block], index: usize) -> Self::Vector;

    /// Write `v` into block `index` of `blocks`.
    fn store(self, v: Self::Vector, blocks: &mut [Block], index: usize);

    /// One forward AES round: `MixColumns(ShiftRows(SubBytes(state))) ^ round_key`.
    ///
    /// Must be bit-identical across all engines.
    fn aes_round(self, state: Self::Vector, round_key: Self::Vector) -> Self::Vector;
}

// =============================================================================
// STATE BUFFER
// =============================================================================

/// The 256-byte sponge state: block 0 is the capacity, blocks 1..16 the rate.
#[derive(Clone, PartialEq, Eq)]
#[repr(C, align(32))]
pub struct StateBuffer {
    pub(crate) blocks: [Block; FEISTEL_BLOCKS],
}

impl StateBuffer {
    /// All-zero state.
    pub const fn zero() -> Self {
        Self {
            blocks: [[0u8; 16]; FEISTEL_BLOCKS],
        }
    }

    /// Build a state from raw bytes.
    pub fn from_bytes(bytes: &[u8; STATE_BYTES]) -> Self {
        let mut state = Self::zero();
        for (block, chunk) in state.blocks.iter_mut().zip(bytes.chunks_exact(16)) {
            block.copy_from_slice(chunk);
        }
        state
    }

    /// The state as one contiguous byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        self.blocks.as_flattened()
    }

    /// The state as 16 blocks.
    pub const fn blocks(&self) -> &[Block; FEISTEL_BLOCKS] {
        &self.blocks
    }
}

impl Default for StateBuffer {
    fn default() -> Self {
        Self::zero()
    }
}

impl core::fmt::Debug for StateBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("StateBuffer { .. }")
    }
}
