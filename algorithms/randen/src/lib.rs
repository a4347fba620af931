#![cfg_attr(not(feature = "std"), no_std)]

//! # Randen
//!
//! Reseedable pseudorandom byte generator: a sponge whose permutation is a
//! 16-branch Feistel network of single AES rounds.
//! Accelerated by AES-NI (x86) and the ARMv8 crypto extension, with a
//! constant-time portable fallback. Output is bit-identical on every backend.

//! # Usage
//! ```rust
//! use randen::{Randen, SEED_BYTES};
//!
//! // 1. Seed (240 bytes, e.g. from the OS entropy source)
//! let seed = [0x5Au8; SEED_BYTES];
//! let mut rng = Randen::new(&seed);
//!
//! // 2. Generate
//! let first = rng.generate_byte();
//! let mut key = [0u8; 32];
//! rng.generate(&mut key);
//!
//! // 3. Reseed with fresh entropy at any time
//! rng.reseed(&[0xC3u8; SEED_BYTES]);
//! # let _ = first;
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod engine;
#[cfg(feature = "ffi")]
mod ffi;
mod generator;
// Raw kernels for integration tests, benches and fuzz targets; not public API.
#[doc(hidden)]
pub mod kernels;
#[cfg(feature = "rand-core")]
mod rng;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "ffi")]
pub use ffi::{
    randen_free, randen_generate, randen_generate_byte, randen_new, randen_reseed,
    RANDEN_SEED_BYTES, RANDEN_STATE_BYTES,
};
pub use generator::Randen;
pub use kernels::constants::{SEED_BYTES, STATE_BYTES};
#[cfg(feature = "rand-core")]
pub use rand_core;
#[cfg(feature = "rand-core")]
pub use rng::RandenSeed;
pub use types::{Backend, BackendUnavailable, Seed};

/// Returns the name of the hardware backend `Randen::new` selects.
#[must_use]
pub fn active_backend() -> &'static str {
    engine::get_active_backend_name()
}
