//! CLI Commands
//!
//! All randen CLI commands organized as separate modules.

mod backends;
mod generate;

pub use backends::{list_backends, BackendChoice};
pub use generate::{generate, GenerateArgs};
