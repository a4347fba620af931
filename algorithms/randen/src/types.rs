//! Shared types used across the Randen library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use crate::kernels::constants::SEED_BYTES;

// =============================================================================
// SEED
// =============================================================================

/// Seed material for `init`/`reseed`: exactly one rate (240 bytes).
pub type Seed = [u8; SEED_BYTES];

// =============================================================================
// BACKENDS
// =============================================================================

/// Vector engine implementations of the permutation.
///
/// All backends produce identical output for identical seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// x86 `AESENC` instruction.
    AesNi,
    /// ARMv8 `AESE` + `AESMC`, key-compensated to match `AESENC`.
    Neon,
    /// Constant-time software round, available everywhere.
    Portable,
}

impl Backend {
    /// Every backend, fastest first.
    pub const ALL: [Self; 3] = [Self::AesNi, Self::Neon, Self::Portable];

    /// Human-readable backend name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AesNi => "AES-NI",
            Self::Neon => "NEON (ARMv8 Crypto)",
            Self::Portable => "Portable",
        }
    }

    /// CPU features the backend needs.
    #[must_use]
    pub const fn required_features(self) -> &'static str {
        match self {
            Self::AesNi => "x86 aes + sse2",
            Self::Neon => "aarch64 neon + aes",
            Self::Portable => "none",
        }
    }

    /// Whether this CPU can run the backend.
    #[must_use]
    pub fn is_available(self) -> bool {
        crate::engine::dispatcher::is_supported(self)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error for a backend this CPU (or build) cannot run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendUnavailable {
    backend: Backend,
}

impl BackendUnavailable {
    /// Create a new `BackendUnavailable` for the refused backend.
    pub const fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// The backend that was requested.
    pub const fn backend(&self) -> Backend {
        self.backend
    }
}

impl fmt::Display for BackendUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Randen backend '{}' is not available on this CPU (requires {}). \
             The Portable backend runs everywhere",
            self.backend.name(),
            self.backend.required_features()
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for BackendUnavailable {}
