// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Single-bit tampering utilities for exhaustive tamper testing.

/// Flips bit `bit` of `data`, counting from the most significant bit of byte 0.
///
/// # Panics
///
/// Panics if `bit >= data.len() * 8`.
///
/// # Example
/// ```
/// use ccm_test_utils::flip_bit;
///
/// let mut data = [0u8; 2];
/// flip_bit(&mut data, 0);
/// flip_bit(&mut data, 15);
/// assert_eq!(data, [0x80, 0x01]);
/// ```
#[inline]
pub fn flip_bit(data: &mut [u8], bit: usize) {
    data[bit / 8] ^= 0x80 >> (bit % 8);
}

/// Calls `callback(bit, tampered)` once per bit of `data`, where `tampered`
/// is `data` with exactly that bit flipped.
///
/// The working copy is restored between calls, so every callback sees a
/// single-bit difference from `data`.
///
/// # Example
/// ```
/// use ccm_test_utils::for_each_bit_flip;
///
/// let mut count = 0;
/// for_each_bit_flip(&[0u8; 3], |_bit, tampered| {
///     assert_eq!(tampered.iter().map(|b| b.count_ones()).sum::<u32>(), 1);
///     count += 1;
/// });
/// assert_eq!(count, 24);
/// ```
pub fn for_each_bit_flip<F>(data: &[u8], mut callback: F)
where
    F: FnMut(usize, &[u8]),
{
    let mut working = data.to_vec();

    for bit in 0..data.len() * 8 {
        flip_bit(&mut working, bit);
        callback(bit, &working);
        flip_bit(&mut working, bit);
    }
}
