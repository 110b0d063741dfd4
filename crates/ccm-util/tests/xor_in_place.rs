// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod xor_in_place_tests {
    use ccm_util::xor_in_place;

    #[test]
    fn test_xor_is_self_inverse() {
        let original = [0x00, 0x11, 0x22, 0x33, 0x44];
        let mask = [0xDE, 0xAD, 0xBE, 0xEF, 0x42];
        let mut data = original;

        xor_in_place(&mut data, &mask);
        assert_ne!(data, original);

        xor_in_place(&mut data, &mask);
        assert_eq!(data, original);
    }

    #[test]
    fn test_xor_with_zero_is_identity() {
        let mut data = [1, 2, 3];
        xor_in_place(&mut data, &[0, 0, 0]);
        assert_eq!(data, [1, 2, 3]);
    }

    #[test]
    fn test_xor_empty() {
        let mut data: [u8; 0] = [];
        xor_in_place(&mut data, &[]);
    }
}
