use bolero::check;
use randen::{Randen, SEED_BYTES};

const RATE: usize = 240;

/// A reseed leaves returned bytes alone, XORs the seed into the pending ones
/// and remixes everything after the next permutation.
#[test]
fn fuzz_reseed_pending_bytes() {
    check!()
        .with_type::<(u8, u8, u16)>()
        .for_each(|(seed_byte, reseed_byte, consumed)| {
            let consumed = usize::from(*consumed % 1000);
            let mut plain = Randen::new(&[*seed_byte; SEED_BYTES]);
            let mut reseeded = Randen::new(&[*seed_byte; SEED_BYTES]);

            let mut a = vec![0u8; consumed];
            let mut b = vec![0u8; consumed];
            plain.generate(&mut a);
            reseeded.generate(&mut b);
            assert_eq!(a, b);

            reseeded.reseed(&[*reseed_byte; SEED_BYTES]);

            let pending = reseeded.buffered();
            let mut a = vec![0u8; pending + RATE];
            let mut b = vec![0u8; pending + RATE];
            plain.generate(&mut a);
            reseeded.generate(&mut b);

            for (x, y) in a[..pending].iter().zip(&b[..pending]) {
                assert_eq!(x ^ y, *reseed_byte, "Pending byte not XORed with seed");
            }
            if *reseed_byte == 0 {
                assert_eq!(a, b, "Zero reseed must be a no-op");
            } else {
                assert_ne!(a[pending..], b[pending..], "Reseed had no effect");
            }
        });
}

/// Reseeding twice with the same seed inside one batch cancels out.
#[test]
fn fuzz_double_reseed_cancels() {
    check!()
        .with_type::<(u8, Vec<u8>)>()
        .for_each(|(seed_byte, extra)| {
            let mut extra_seed = [0u8; SEED_BYTES];
            for (dst, src) in extra_seed.iter_mut().zip(extra) {
                *dst = *src;
            }

            let mut plain = Randen::new(&[*seed_byte; SEED_BYTES]);
            let mut twice = Randen::new(&[*seed_byte; SEED_BYTES]);
            twice.reseed(&extra_seed);
            twice.reseed(&extra_seed);

            let mut a = [0u8; 512];
            let mut b = [0u8; 512];
            plain.generate(&mut a);
            twice.generate(&mut b);
            assert_eq!(a, b);
        });
}
