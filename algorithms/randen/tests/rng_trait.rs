//! Tests for the `rand_core` trait integration.
#![cfg(feature = "rand-core")]
#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Verifies that `Randen` works as an `RngCore` / `SeedableRng` in generic contexts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use randen::rand_core::{CryptoRng, RngCore};
use randen::{Randen, RandenSeed, SEED_BYTES};

// Helpers kept outside test bodies to satisfy `items_after_statements`
fn fill_generic<R: RngCore>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    rng.fill_bytes(&mut out);
    out
}

fn requires_crypto_rng<R: RngCore + CryptoRng>(rng: &mut R) -> u64 {
    rng.next_u64()
}

#[test]
fn test_fill_bytes_matches_generate() {
    let seed = [0x11u8; SEED_BYTES];
    let mut direct = Randen::new(&seed);
    let mut generic = Randen::new(&seed);

    let mut expected = vec![0u8; 777];
    direct.generate(&mut expected);
    assert_eq!(fill_generic(&mut generic, 777), expected);
}

#[test]
fn test_try_fill_bytes_never_fails() {
    let mut rng = Randen::new(&[0u8; SEED_BYTES]);
    let mut buf = [0u8; 1000];
    assert!(rng.try_fill_bytes(&mut buf).is_ok());
    assert!(rng.try_fill_bytes(&mut []).is_ok());
}

#[test]
fn test_next_u64_is_little_endian() {
    let seed = [0u8; SEED_BYTES];
    let mut rng = Randen::new(&seed);
    let mut reference = Randen::new(&seed);

    let mut bytes = [0u8; 8];
    reference.generate(&mut bytes);
    assert_eq!(rng.next_u64(), u64::from_le_bytes(bytes));
    assert_eq!(bytes[..5], [0x8f, 0x5d, 0x28, 0x6e, 0xb9]);
}

#[test]
fn test_crypto_rng_bound() {
    let mut rng = Randen::new(&[3u8; SEED_BYTES]);
    let _ = requires_crypto_rng(&mut rng);
}

#[test]
fn test_rand_ext_methods() {
    let mut rng = Randen::new(&[5u8; SEED_BYTES]);

    for _ in 0..1000 {
        let x: u32 = rng.gen_range(10..20);
        assert!((10..20).contains(&x));
    }
    let f: f64 = rng.gen();
    assert!((0.0..1.0).contains(&f));
}

#[test]
fn test_seedable_rng() {
    let mut seed = RandenSeed::default();
    seed.as_mut()[7] = 0xAB;
    let raw = seed.0;

    let mut a = Randen::from_seed(seed);
    let mut b = Randen::new(&raw);
    assert_eq!(a.next_u64(), b.next_u64());

    // `seed_from_u64` expands deterministically.
    let mut c = Randen::seed_from_u64(42);
    let mut d = Randen::seed_from_u64(42);
    let mut e = Randen::seed_from_u64(43);
    let (x, y, z) = (c.next_u64(), d.next_u64(), e.next_u64());
    assert_eq!(x, y);
    assert_ne!(x, z);
}

#[test]
fn test_from_rng() {
    let mut source = StdRng::seed_from_u64(7);
    let mut a = Randen::from_rng(&mut source).unwrap();

    let mut source = StdRng::seed_from_u64(7);
    let mut b = Randen::from_rng(&mut source).unwrap();
    assert_eq!(a.next_u64(), b.next_u64());
}

#[test]
fn test_seed_debug_redacted() {
    let seed = RandenSeed::from([0x99u8; SEED_BYTES]);
    assert_eq!(format!("{seed:?}"), "RandenSeed(..)");
}
