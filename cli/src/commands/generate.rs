//! Generate Command
//!
//! Streams generator output to stdout.

use super::BackendChoice;
use anyhow::{bail, Context, Result};
use randen::{Randen, Seed, SEED_BYTES};
use std::io::{Read, Write};
use std::path::PathBuf;

const CHUNK: usize = 64 * 1024;

pub struct GenerateArgs {
    pub seed: Option<String>,
    pub seed_file: Option<PathBuf>,
    pub count: u64,
    pub hex: bool,
    pub backend: BackendChoice,
}

// =============================================================================
// SEED LOADING
// =============================================================================

fn parse_hex_seed(text: &str) -> Result<Seed> {
    let bytes = hex::decode(text.trim()).context("Seed is not valid hex")?;
    if bytes.len() != SEED_BYTES {
        bail!("Seed must be exactly {SEED_BYTES} bytes, got {}", bytes.len());
    }

    let mut seed = [0u8; SEED_BYTES];
    seed.copy_from_slice(&bytes);
    Ok(seed)
}

fn read_seed_file(path: &PathBuf) -> Result<Seed> {
    let mut file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open: {}", path.display()))?;

    let mut seed = [0u8; SEED_BYTES];
    file.read_exact(&mut seed).with_context(|| {
        format!("Seed file {} is shorter than {SEED_BYTES} bytes", path.display())
    })?;
    Ok(seed)
}

fn load_seed(args: &GenerateArgs) -> Result<Seed> {
    match (&args.seed, &args.seed_file) {
        (Some(text), _) => parse_hex_seed(text),
        (None, Some(path)) => read_seed_file(path),
        (None, None) => {
            log::warn!("no seed given, using the all-zero seed");
            Ok([0u8; SEED_BYTES])
        }
    }
}

// =============================================================================
// GENERATE
// =============================================================================

/// Write `count` bytes of output to stdout, raw or hex-encoded.
pub fn generate(args: &GenerateArgs) -> Result<()> {
    let seed = load_seed(args)?;
    let mut rng = match args.backend.backend() {
        None => Randen::new(&seed),
        Some(backend) => Randen::with_backend(&seed, backend)?,
    };
    log::info!("generating {} bytes with {}", args.count, rng.backend());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut buffer = vec![0u8; CHUNK];
    let mut remaining = args.count;

    while remaining > 0 {
        let n = usize::try_from(remaining).map_or(CHUNK, |r| r.min(CHUNK));
        let chunk = &mut buffer[..n];
        rng.generate(chunk);

        if args.hex {
            out.write_all(hex::encode(chunk).as_bytes())
        } else {
            out.write_all(chunk)
        }
        .context("Failed to write output")?;

        remaining -= n as u64;
    }

    if args.hex && args.count > 0 {
        writeln!(out).context("Failed to write output")?;
    }
    out.flush().context("Failed to write output")?;

    Ok(())
}
