//! # `PractRand` Stream Generator
//!
//! Writes an endless stream of Randen output to stdout for statistical
//! test suites, e.g. `randen_stream | RNG_test stdin8`.
//!
//! Modes:
//! - `bulk`: large `generate` calls
//! - `byte`: one `generate_byte` call per byte
//! - `reseed`: bulk output with a counter-derived reseed every N bytes

use anyhow::Result;
use clap::{Parser, ValueEnum};
use randen::{Backend, Randen, SEED_BYTES};
use std::io::{self, Write};

#[derive(Copy, Clone, ValueEnum)]
enum Mode {
    Bulk,
    Byte,
    Reseed,
}

#[derive(Parser)]
#[command(about = "Raw Randen output for PractRand / TestU01")]
struct Args {
    /// Output pattern
    #[arg(value_enum, default_value_t = Mode::Bulk)]
    mode: Mode,

    /// Fill every seed byte with this value
    #[arg(long, default_value_t = 0)]
    seed_byte: u8,

    /// Bytes between reseeds (`reseed` mode)
    #[arg(long, default_value_t = 1000)]
    interval: usize,

    /// Force the portable backend
    #[arg(long)]
    portable: bool,
}

const CHUNK: usize = 64 * 1024;

/// Entry point for the `PractRand` stream generator.
fn main() -> Result<()> {
    let args = Args::parse();
    let seed = [args.seed_byte; SEED_BYTES];
    let mut rng = if args.portable {
        Randen::with_backend(&seed, Backend::Portable)?
    } else {
        Randen::new(&seed)
    };
    eprintln!("randen_stream: backend {}", rng.backend());

    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());
    let mut buffer = vec![0u8; CHUNK];
    let mut counter: u64 = 0;

    loop {
        match args.mode {
            Mode::Bulk => rng.generate(&mut buffer),
            Mode::Byte => buffer.iter_mut().for_each(|b| *b = rng.generate_byte()),
            Mode::Reseed => {
                for chunk in buffer.chunks_mut(args.interval.max(1)) {
                    rng.generate(chunk);

                    let mut reseed = [0u8; SEED_BYTES];
                    reseed[..8].copy_from_slice(&counter.to_le_bytes());
                    rng.reseed(&reseed);
                    counter = counter.wrapping_add(1);
                }
            }
        }

        // Stop quietly once the reader hangs up.
        if handle.write_all(&buffer).is_err() {
            break;
        }
    }

    // The reader usually hung up already, so a broken pipe here is expected.
    let _ = handle.flush();
    Ok(())
}
