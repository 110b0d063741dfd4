// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ccm_aead_core::CcmError;
use ccm_test_utils::for_each_bit_flip;
use proptest::prelude::*;

use crate::ccm::{ccm_decrypt, ccm_encrypt};

fn tag_len() -> impl Strategy<Value = usize> {
    prop::sample::select(vec![4usize, 6, 8, 10, 12, 14, 16])
}

fn nonce() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 7..=13)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn roundtrip_any_parameters(
        key in prop::array::uniform16(any::<u8>()),
        nonce in nonce(),
        aad in prop::collection::vec(any::<u8>(), 0..64),
        payload in prop::collection::vec(any::<u8>(), 0..128),
        tag_len in tag_len(),
    ) {
        let ciphertext = ccm_encrypt(&key, &nonce, &aad, &payload, tag_len)
            .expect("Failed to ccm_encrypt(..)");
        prop_assert_eq!(ciphertext.len(), payload.len() + tag_len);

        let plaintext = ccm_decrypt(&key, &nonce, &aad, &ciphertext, tag_len)
            .expect("Failed to ccm_decrypt(..)");
        prop_assert_eq!(plaintext, payload);
    }

    #[test]
    fn ciphertext_body_is_independent_of_tag_length(
        key in prop::array::uniform16(any::<u8>()),
        payload in prop::collection::vec(any::<u8>(), 0..48),
    ) {
        let nonce = [0x11u8; 13];
        let short = ccm_encrypt(&key, &nonce, &[], &payload, 8).expect("Failed to ccm_encrypt(..)");
        let long = ccm_encrypt(&key, &nonce, &[], &payload, 16).expect("Failed to ccm_encrypt(..)");

        // Counter flags carry q only
        prop_assert_eq!(&short[..payload.len()], &long[..payload.len()]);
    }

    #[test]
    fn any_single_bit_flip_is_rejected(
        key in prop::array::uniform16(any::<u8>()),
        nonce in nonce(),
        aad in prop::collection::vec(any::<u8>(), 0..8),
        payload in prop::collection::vec(any::<u8>(), 0..8),
        tag_len in tag_len(),
    ) {
        let ciphertext = ccm_encrypt(&key, &nonce, &aad, &payload, tag_len)
            .expect("Failed to ccm_encrypt(..)");

        for_each_bit_flip(&ciphertext, |bit, tampered| {
            assert_eq!(
                ccm_decrypt(&key, &nonce, &aad, tampered, tag_len),
                Err(CcmError::AuthenticationFailed),
                "ciphertext bit {bit} flip accepted"
            );
        });

        for_each_bit_flip(&aad, |bit, tampered| {
            assert_eq!(
                ccm_decrypt(&key, &nonce, tampered, &ciphertext, tag_len),
                Err(CcmError::AuthenticationFailed),
                "aad bit {bit} flip accepted"
            );
        });

        for_each_bit_flip(&nonce, |bit, tampered| {
            assert_eq!(
                ccm_decrypt(&key, tampered, &aad, &ciphertext, tag_len),
                Err(CcmError::AuthenticationFailed),
                "nonce bit {bit} flip accepted"
            );
        });
    }
}
