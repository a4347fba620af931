//! Randen Generator
//!
//! Owns the sponge state and the output cursor. Output is served from the
//! rate region of the last permutation; a new permutation runs lazily, only
//! when a read finds the buffer exhausted.
//!
//! ```text
//! state: [ capacity (16) | rate (240)                          ]
//!                          ^ next .......................... 256
//! ```

use core::fmt;
use zeroize::Zeroize;

use crate::engine::dispatcher::{self, PermuteFn};
use crate::engine::sponge;
use crate::kernels::constants::{CAPACITY_BYTES, STATE_BYTES};
use crate::kernels::StateBuffer;
use crate::types::{Backend, BackendUnavailable, Seed};

// =============================================================================
// GENERATOR
// =============================================================================

/// Reseedable Randen pseudorandom byte generator.
///
/// Deterministic: the same seed (and reseed sequence) always yields the same
/// bytes, on every backend. Not `Clone`: duplicating a generator would
/// duplicate its output stream.
pub struct Randen {
    /// Sponge state (capacity block + rate).
    state: StateBuffer,
    /// Next unread byte; `STATE_BYTES` means exhausted.
    next: usize,
    /// Selected permutation kernel.
    permute: PermuteFn,
    /// Backend behind `permute`.
    backend: Backend,
    /// Permutations run since `init`.
    permutations: u64,
}

impl Randen {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a generator on the fastest backend this CPU supports.
    ///
    /// The state is zeroed and the seed absorbed. No permutation runs until
    /// the first byte is requested.
    #[must_use]
    pub fn new(seed: &Seed) -> Self {
        let (backend, permute) = dispatcher::get_best_kernel();
        Self::init(seed, backend, permute)
    }

    /// Create a generator on a specific backend.
    ///
    /// # Errors
    /// Returns `BackendUnavailable` if the CPU cannot run `backend`.
    pub fn with_backend(seed: &Seed, backend: Backend) -> Result<Self, BackendUnavailable> {
        let permute = dispatcher::kernel_for(backend).inspect_err(|e| log::warn!("randen: {e}"))?;
        Ok(Self::init(seed, backend, permute))
    }

    fn init(seed: &Seed, backend: Backend, permute: PermuteFn) -> Self {
        let mut generator = Self {
            state: StateBuffer::zero(),
            next: STATE_BYTES,
            permute,
            backend,
            permutations: 0,
        };
        generator.reseed(seed);
        generator
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Mix fresh entropy into the rate.
    ///
    /// The seed is XORed into the live rate, so bytes already returned are
    /// unaffected but every still-buffered byte at position `p` comes out as
    /// its old value XOR `seed[p - 16]`. Output after the next permutation
    /// depends on the whole seed.
    pub fn reseed(&mut self, seed: &Seed) {
        sponge::absorb(&mut self.state, seed);
    }

    /// Return the next output byte.
    pub fn generate_byte(&mut self) -> u8 {
        if self.next >= STATE_BYTES {
            self.refill();
        }
        let byte = self.state.as_bytes()[self.next];
        self.next += 1;
        byte
    }

    /// Fill `out` with output bytes.
    ///
    /// Produces exactly the bytes `out.len()` calls to
    /// [`generate_byte`](Self::generate_byte) would, copying whole buffered
    /// runs at a time.
    pub fn generate(&mut self, out: &mut [u8]) {
        let mut out = out;
        while !out.is_empty() {
            if self.next >= STATE_BYTES {
                self.refill();
            }
            let available = &self.state.as_bytes()[self.next..];
            let n = available.len().min(out.len());
            let (head, tail) = out.split_at_mut(n);
            head.copy_from_slice(&available[..n]);
            self.next += n;
            out = tail;
        }
    }

    /// Run one permutation and rewind the cursor past the capacity.
    fn refill(&mut self) {
        sponge::generate(&mut self.state, self.permute);
        self.permutations += 1;
        self.next = CAPACITY_BYTES;
    }

    // =========================================================================
    // DIAGNOSTICS
    // =========================================================================

    /// Backend running the permutation.
    pub const fn backend(&self) -> Backend {
        self.backend
    }

    /// Number of permutations run so far.
    pub const fn permutations(&self) -> u64 {
        self.permutations
    }

    /// Bytes that can be read before the next permutation.
    pub const fn buffered(&self) -> usize {
        STATE_BYTES - self.next
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl fmt::Debug for Randen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Randen")
            .field("backend", &self.backend)
            .field("next", &self.next)
            .field("permutations", &self.permutations)
            .finish_non_exhaustive()
    }
}

impl Drop for Randen {
    fn drop(&mut self) {
        self.state.blocks.zeroize();
        self.next.zeroize();
    }
}
