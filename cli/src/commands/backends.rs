//! Backends Command
//!
//! Backend listing and the `--backend` flag.

use clap::ValueEnum;
use randen::Backend;

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum BackendChoice {
    /// Fastest backend this CPU supports
    Auto,
    /// x86 AES-NI
    AesNi,
    /// ARMv8 Crypto Extensions
    Neon,
    /// Constant-time software AES
    Portable,
}

impl BackendChoice {
    /// `None` means let the dispatcher pick.
    pub const fn backend(self) -> Option<Backend> {
        match self {
            Self::Auto => None,
            Self::AesNi => Some(Backend::AesNi),
            Self::Neon => Some(Backend::Neon),
            Self::Portable => Some(Backend::Portable),
        }
    }
}

/// Print every backend with its availability on this CPU.
pub fn list_backends() {
    let active = randen::active_backend();

    for backend in Backend::ALL {
        let status = if backend.is_available() { "available" } else { "unsupported" };
        let marker = if backend.name() == active { " (auto)" } else { "" };
        println!("{:<22} {status}{marker}", backend.name());
    }
}
