//! Portable software implementation of the single AES round.
//!
//! No lookup tables: the S-box is computed as the GF(2^8) inverse (by
//! exponentiation to 254) followed by the affine map, and every conditional
//! reduction is a `subtle` select. Memory access pattern and instruction
//! stream are independent of the data.

use crate::kernels::constants::{Block, BLOCK_BYTES};
use subtle::{Choice, ConditionallySelectable};

/// AES GF(2^8) reduction polynomial: x^8 + x^4 + x^3 + x + 1
const GF_POLY: u8 = 0x1b;

/// Affine constant of the AES S-box.
const SBOX_AFFINE: u8 = 0x63;

/// Software 128-bit vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct U128 {
    /// Bytes in memory order.
    pub b: Block,
}

impl U128 {
    /// All-zero vector.
    pub const fn zero() -> Self {
        Self { b: [0; BLOCK_BYTES] }
    }

    /// Wrap a block.
    pub const fn from_block(b: Block) -> Self {
        Self { b }
    }

    /// Bitwise XOR.
    pub fn xor(&self, other: &Self) -> Self {
        let mut res = Self::zero();
        for (i, res_i) in res.b.iter_mut().enumerate() {
            *res_i = self.b[i] ^ other.b[i];
        }
        res
    }
}

/// GF(2^8) multiplication by 2 (used in `MixColumns`).
fn gf_double(b: u8) -> u8 {
    (b << 1) ^ u8::conditional_select(&0, &GF_POLY, Choice::from(b >> 7))
}

/// GF(2^8) multiplication, always eight iterations.
fn gf_mul(a: u8, b: u8) -> u8 {
    let mut acc = 0u8;
    let mut a = a;
    for i in 0..8 {
        acc ^= u8::conditional_select(&0, &a, Choice::from((b >> i) & 1));
        a = gf_double(a);
    }
    acc
}

/// Multiplicative inverse as `x^254` (maps 0 to 0).
fn gf_inverse(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x3 = gf_mul(x2, x);
    let x6 = gf_mul(x3, x3);
    let x12 = gf_mul(x6, x6);
    let x15 = gf_mul(x12, x3);
    let x30 = gf_mul(x15, x15);
    let x60 = gf_mul(x30, x30);
    let x120 = gf_mul(x60, x60);
    let x240 = gf_mul(x120, x120);
    let x252 = gf_mul(x240, x12);
    gf_mul(x252, x2)
}

/// AES S-box.
fn sub_byte(x: u8) -> u8 {
    let inv = gf_inverse(x);
    inv ^ inv.rotate_left(1) ^ inv.rotate_left(2) ^ inv.rotate_left(3) ^ inv.rotate_left(4) ^ SBOX_AFFINE
}

/// `SubBytes` followed by `ShiftRows` (column-major state layout).
pub fn sub_bytes_shift_rows(state: U128) -> U128 {
    let mut s = state.b;
    for b in &mut s {
        *b = sub_byte(*b);
    }

    // Row 0: No shift
    // Row 1: Shift left 1
    let tmp = s[1];
    s[1] = s[5];
    s[5] = s[9];
    s[9] = s[13];
    s[13] = tmp;
    // Row 2: Shift left 2
    s.swap(2, 10);
    s.swap(6, 14);
    // Row 3: Shift left 3
    let tmp = s[15];
    s[15] = s[11];
    s[11] = s[7];
    s[7] = s[3];
    s[3] = tmp;

    U128 { b: s }
}

/// AES `MixColumns` on a single 4-byte column.
fn mix_column(c: &mut [u8]) {
    let t = [c[0], c[1], c[2], c[3]];
    c[0] = gf_double(t[0] ^ t[1]) ^ t[1] ^ t[2] ^ t[3];
    c[1] = gf_double(t[1] ^ t[2]) ^ t[2] ^ t[3] ^ t[0];
    c[2] = gf_double(t[2] ^ t[3]) ^ t[3] ^ t[0] ^ t[1];
    c[3] = gf_double(t[3] ^ t[0]) ^ t[0] ^ t[1] ^ t[2];
}

/// AES `MixColumns` on the full state.
pub fn mix_columns(state: U128) -> U128 {
    let mut s = state.b;
    for column in s.chunks_exact_mut(4) {
        mix_column(column);
    }
    U128 { b: s }
}

/// One full AES encryption round, `AESENC` semantics.
pub fn aesenc(state: U128, key: U128) -> U128 {
    mix_columns(sub_bytes_shift_rows(state)).xor(&key)
}
