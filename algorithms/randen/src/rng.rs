//! `rand_core` integration.
//!
//! Lets a [`Randen`] drive anything in the `rand` ecosystem.

use rand_core::{impls, CryptoRng, Error, RngCore, SeedableRng};
use zeroize::Zeroize;

use crate::generator::Randen;
use crate::kernels::constants::SEED_BYTES;
use crate::types::Seed;

// =============================================================================
// SEED WRAPPER
// =============================================================================

/// 240-byte seed for [`SeedableRng`], wiped on drop.
///
/// A bare `[u8; 240]` has no `Default` impl, which `SeedableRng` requires.
#[derive(Clone, PartialEq, Eq)]
pub struct RandenSeed(pub Seed);

impl Default for RandenSeed {
    fn default() -> Self {
        Self([0u8; SEED_BYTES])
    }
}

impl AsRef<[u8]> for RandenSeed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for RandenSeed {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl From<Seed> for RandenSeed {
    fn from(seed: Seed) -> Self {
        Self(seed)
    }
}

impl core::fmt::Debug for RandenSeed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("RandenSeed(..)")
    }
}

impl Drop for RandenSeed {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl RngCore for Randen {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.generate(dest);
    }

    /// Never fails.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.generate(dest);
        Ok(())
    }
}

impl CryptoRng for Randen {}

impl SeedableRng for Randen {
    type Seed = RandenSeed;

    fn from_seed(seed: RandenSeed) -> Self {
        Self::new(&seed.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_u32_is_little_endian_fill() {
        let seed = [0u8; SEED_BYTES];
        let mut a = Randen::new(&seed);
        let mut b = Randen::new(&seed);

        let mut bytes = [0u8; 4];
        b.generate(&mut bytes);
        assert_eq!(a.next_u32(), u32::from_le_bytes(bytes));
        assert_eq!(a.next_u32(), {
            b.generate(&mut bytes);
            u32::from_le_bytes(bytes)
        });
    }

    #[test]
    fn test_from_seed_matches_new() {
        let mut seed = RandenSeed::default();
        seed.as_mut()[0] = 1;
        let raw = seed.0;

        let mut a = Randen::from_seed(seed);
        let mut b = Randen::new(&raw);
        assert_eq!(a.next_u64(), b.next_u64());
    }
}
