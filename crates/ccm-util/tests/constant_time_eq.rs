// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod constant_time_eq_tests {
    use ccm_util::constant_time_eq;

    #[test]
    fn test_equal_tags() {
        assert!(constant_time_eq(
            &[0x17, 0xE8, 0xD1, 0x2C, 0xFD, 0xF9, 0x26, 0xE0],
            &[0x17, 0xE8, 0xD1, 0x2C, 0xFD, 0xF9, 0x26, 0xE0]
        ));
    }

    #[test]
    fn test_mismatch_in_first_byte() {
        assert!(!constant_time_eq(&[0x00, 0x01, 0x02, 0x03], &[0x80, 0x01, 0x02, 0x03]));
    }

    #[test]
    fn test_mismatch_in_last_byte() {
        assert!(!constant_time_eq(&[0x00, 0x01, 0x02, 0x03], &[0x00, 0x01, 0x02, 0x02]));
    }

    #[test]
    fn test_truncated_tag_is_not_equal() {
        assert!(!constant_time_eq(&[1, 2, 3, 4, 5, 6], &[1, 2, 3, 4]));
    }

    #[test]
    fn test_empty_slices() {
        let a: [u8; 0] = [];
        assert!(constant_time_eq(&a, &a));
    }

    #[test]
    fn test_every_single_bit_difference_is_detected() {
        let reference = [0xA5u8; 16];

        for bit in 0..reference.len() * 8 {
            let mut tampered = reference;
            tampered[bit / 8] ^= 1 << (bit % 8);

            assert!(!constant_time_eq(&reference, &tampered), "bit {bit} not detected");
        }
    }
}
