// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte helpers shared by the CCM crates.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "test-utils")]
extern crate alloc;

#[cfg(feature = "test-utils")]
use alloc::vec::Vec;

/// Constant-time equality comparison for byte slices.
///
/// Every byte of both slices is read regardless of where the first
/// difference sits. Only the lengths (public values) short-circuit.
///
/// # Example
///
/// ```
/// use ccm_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 4]));
/// assert!(!constant_time_eq(&[1, 2, 3, 4], &[0, 2, 3, 4]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let diff = a
        .iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y));

    core::hint::black_box(diff) == 0
}

/// XORs `src` into `dst` byte by byte.
///
/// Both slices must have the same length.
///
/// # Example
///
/// ```
/// use ccm_util::xor_in_place;
///
/// let mut dst = [0xF0, 0x0F];
/// xor_in_place(&mut dst, &[0xFF, 0xFF]);
/// assert_eq!(dst, [0x0F, 0xF0]);
/// ```
#[inline]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());

    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}

/// Verifies that a slice is zeroized.
#[inline]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Parses a hexadecimal string into bytes, ignoring ASCII whitespace.
///
/// Whitespace lets long test vectors be split across lines.
///
/// # Panics
///
/// Panics on invalid hex characters or an odd number of digits.
///
/// # Example
///
/// ```
/// use ccm_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("dead beef"), vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    let digits: Vec<u8> = hex
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    assert!(digits.len() % 2 == 0, "odd number of hex digits");

    digits
        .chunks_exact(2)
        .map(|pair| {
            let pair = core::str::from_utf8(pair).expect("hex digits must be ASCII");
            u8::from_str_radix(pair, 16).expect("invalid hex digit")
        })
        .collect()
}
