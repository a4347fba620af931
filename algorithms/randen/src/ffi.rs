//! C-API Bindings
//!
//! Exposes Randen to C/C++ via FFI with pointer safety and panic boundaries.
//! Generators are opaque heap handles created by `randen_new` and released
//! by `randen_free`.

#![allow(unsafe_code)]

use std::ptr;
use std::slice;

use crate::generator::Randen;
use crate::kernels::constants::{SEED_BYTES, STATE_BYTES};
use crate::types::Seed;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Size of the internal state in bytes.
pub const RANDEN_STATE_BYTES: usize = STATE_BYTES;

/// Size of a seed in bytes.
pub const RANDEN_SEED_BYTES: usize = SEED_BYTES;

unsafe fn read_seed(seed_ptr: *const u8) -> Seed {
    let mut seed = [0u8; SEED_BYTES];
    seed.copy_from_slice(slice::from_raw_parts(seed_ptr, SEED_BYTES));
    seed
}

// =============================================================================
// LIFECYCLE
// =============================================================================

/// Create a generator seeded with `RANDEN_SEED_BYTES` bytes.
///
/// # Safety
/// - `seed_ptr` must be valid for `RANDEN_SEED_BYTES` readable bytes
///
/// # Returns
/// A handle to pass to the other functions, or null on a null seed or panic.
#[no_mangle]
pub unsafe extern "C" fn randen_new(seed_ptr: *const u8) -> *mut Randen {
    if seed_ptr.is_null() {
        return ptr::null_mut();
    }

    let result = std::panic::catch_unwind(|| {
        let seed = read_seed(seed_ptr);
        Box::into_raw(Box::new(Randen::new(&seed)))
    });

    result.unwrap_or(ptr::null_mut())
}

/// Destroy a generator. The state is wiped before the memory is released.
///
/// # Safety
/// - `rng` must come from `randen_new` and not have been freed (null is ignored)
#[no_mangle]
pub unsafe extern "C" fn randen_free(rng: *mut Randen) {
    if !rng.is_null() {
        drop(Box::from_raw(rng));
    }
}

// =============================================================================
// GENERATION
// =============================================================================

/// Absorb `RANDEN_SEED_BYTES` bytes of fresh entropy.
///
/// # Safety
/// - `rng` must be a live handle from `randen_new`
/// - `seed_ptr` must be valid for `RANDEN_SEED_BYTES` readable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn randen_reseed(rng: *mut Randen, seed_ptr: *const u8) -> i32 {
    if rng.is_null() || seed_ptr.is_null() {
        return -1;
    }

    let result = std::panic::catch_unwind(|| {
        let seed = read_seed(seed_ptr);
        (*rng).reseed(&seed);
    });

    match result {
        Ok(()) => 0,
        Err(_) => -2,
    }
}

/// Write one output byte to `out_ptr`.
///
/// # Safety
/// - `rng` must be a live handle from `randen_new`
/// - `out_ptr` must be valid for 1 writable byte
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn randen_generate_byte(rng: *mut Randen, out_ptr: *mut u8) -> i32 {
    if rng.is_null() || out_ptr.is_null() {
        return -1;
    }

    let result = std::panic::catch_unwind(|| {
        *out_ptr = (*rng).generate_byte();
    });

    match result {
        Ok(()) => 0,
        Err(_) => -2,
    }
}

/// Fill `out_len` bytes at `out_ptr` with output.
///
/// # Safety
/// - `rng` must be a live handle from `randen_new`
/// - `out_ptr` must be valid for `out_len` writable bytes (may be null if `out_len == 0`)
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn randen_generate(rng: *mut Randen, out_ptr: *mut u8, out_len: usize) -> i32 {
    if rng.is_null() || (out_ptr.is_null() && out_len > 0) {
        return -1;
    }
    if out_len == 0 {
        return 0;
    }

    let result = std::panic::catch_unwind(|| {
        let out = slice::from_raw_parts_mut(out_ptr, out_len);
        (*rng).generate(out);
    });

    match result {
        Ok(()) => 0,
        Err(_) => -2,
    }
}
