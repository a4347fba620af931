//! Randen CLI
//!
//! Deterministic random bytes from a 240-byte seed.

mod commands;
mod logger;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{generate, list_backends, BackendChoice, GenerateArgs};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "randen")]
#[command(about = "Randen sponge PRNG (AES-round Feistel permutation)", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log backend selection to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write generated bytes to stdout
    Generate {
        /// Seed as hex (240 bytes)
        #[arg(long, value_name = "HEX", conflicts_with = "seed_file")]
        seed: Option<String>,

        /// Read the seed from the first 240 bytes of a file
        #[arg(long, value_name = "PATH")]
        seed_file: Option<PathBuf>,

        /// Number of bytes to generate
        #[arg(short = 'n', long, default_value_t = 64)]
        count: u64,

        /// Print hex instead of raw bytes
        #[arg(long)]
        hex: bool,

        /// Permutation backend
        #[arg(short, long, value_enum, default_value_t = BackendChoice::Auto)]
        backend: BackendChoice,
    },
    /// List backends and whether this CPU supports them
    Backends,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match cli.command {
        Commands::Generate {
            seed,
            seed_file,
            count,
            hex,
            backend,
        } => generate(&GenerateArgs {
            seed,
            seed_file,
            count,
            hex,
            backend,
        })?,
        Commands::Backends => list_backends(),
    }

    Ok(())
}
