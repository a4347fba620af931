//! Hardware Dispatcher
//!
//! Selects the fastest available permutation kernel (AES-NI, NEON, or
//! portable) for the current CPU.

use crate::kernels::{self, StateBuffer};
use crate::types::{Backend, BackendUnavailable};

/// Unified kernel signature: permute the state in place.
///
/// Every backend exposes this same signature so a generator can hold the
/// selected kernel as a plain function pointer.
pub type PermuteFn = fn(&mut StateBuffer);

// =============================================================================
// DETECTION
// =============================================================================

/// Whether `backend` can run on this CPU.
///
/// With `std` this is a runtime CPUID / HWCAP check; without it, the
/// decision is made from the compile-time target features.
#[must_use]
pub fn is_supported(backend: Backend) -> bool {
    match backend {
        Backend::AesNi => has_aesni(),
        Backend::Neon => has_neon_aes(),
        Backend::Portable => true,
    }
}

fn has_aesni() -> bool {
    #[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))]
    {
        std::is_x86_feature_detected!("aes") && std::is_x86_feature_detected!("sse2")
    }
    #[cfg(all(not(feature = "std"), any(target_arch = "x86", target_arch = "x86_64")))]
    {
        cfg!(target_feature = "aes") && cfg!(target_feature = "sse2")
    }
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    {
        false
    }
}

fn has_neon_aes() -> bool {
    #[cfg(all(feature = "std", target_arch = "aarch64"))]
    {
        std::arch::is_aarch64_feature_detected!("neon") && std::arch::is_aarch64_feature_detected!("aes")
    }
    #[cfg(all(not(feature = "std"), target_arch = "aarch64"))]
    {
        cfg!(target_feature = "neon") && cfg!(target_feature = "aes")
    }
    #[cfg(not(target_arch = "aarch64"))]
    {
        false
    }
}

// =============================================================================
// DISPATCHER
// =============================================================================

/// Returns the fastest backend for this CPU and its kernel.
#[must_use]
pub fn get_best_kernel() -> (Backend, PermuteFn) {
    for backend in Backend::ALL {
        if let Ok(kernel) = kernel_for(backend) {
            log::debug!("randen: selected {backend} backend");
            return (backend, kernel);
        }
    }
    (Backend::Portable, kernels::portable::permute)
}

/// Returns the kernel for a specific backend.
///
/// # Errors
/// Returns `BackendUnavailable` if the CPU lacks the backend's features or
/// the backend does not exist for this architecture.
pub fn kernel_for(backend: Backend) -> Result<PermuteFn, BackendUnavailable> {
    if !is_supported(backend) {
        return Err(BackendUnavailable::new(backend));
    }
    match backend {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        Backend::AesNi => Ok(safe_aesni_wrapper),
        #[cfg(target_arch = "aarch64")]
        Backend::Neon => Ok(safe_neon_wrapper),
        Backend::Portable => Ok(kernels::portable::permute),
        #[allow(unreachable_patterns)]
        _ => Err(BackendUnavailable::new(backend)),
    }
}

/// Returns the name of the backend `get_best_kernel` would pick.
#[must_use]
pub fn get_active_backend_name() -> &'static str {
    Backend::ALL
        .into_iter()
        .find(|&backend| is_supported(backend))
        .unwrap_or(Backend::Portable)
        .name()
}

// =============================================================================
// WRAPPERS
// =============================================================================

/// AES-NI wrapper.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[inline]
#[allow(unsafe_code)]
fn safe_aesni_wrapper(state: &mut StateBuffer) {
    // SAFETY: Only handed out by `kernel_for` after AES/SSE2 detection.
    unsafe { kernels::aesni::permute(state) }
}

/// NEON wrapper.
#[cfg(target_arch = "aarch64")]
#[inline]
#[allow(unsafe_code)]
fn safe_neon_wrapper(state: &mut StateBuffer) {
    // SAFETY: Only handed out by `kernel_for` after NEON/AES detection.
    unsafe { kernels::neon::permute(state) }
}
