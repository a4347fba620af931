//! Randen Basic Example
//!
//! Minimal usage: `let mut rng = randen::Randen::new(&seed);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    let seed = [0u8; randen::SEED_BYTES];
    let mut rng = randen::Randen::new(&seed);

    let mut out = [0u8; 32];
    rng.generate(&mut out);

    println!("Backend: {}", rng.backend());
    println!("Output:  {}", hex::encode(out));
}
