// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ccm_aead_core::{CcmError, CcmParams, ConfigError};

use crate::counter::counter_block_count;
use crate::encrypt::encrypt_in_place;
use crate::format::formatted_block_count;
use crate::support::test_utils::{BlockCipherMock, BlockCipherMockBehaviour};

const KEY: [u8; 16] = [0x07; 16];

fn params(nonce_len: usize, tag_len: usize) -> CcmParams {
    CcmParams::new(nonce_len, tag_len).expect("Failed to new(..)")
}

#[test]
fn test_encrypt_block_cipher_invocations() {
    let cipher = BlockCipherMock::new(BlockCipherMockBehaviour::Aes(KEY));
    let aad = [0xAAu8; 30];
    let mut data = [0x11u8; 33];
    let mut tag = [0u8; 8];

    encrypt_in_place(&cipher, &params(13, 8), &[0u8; 13], &aad, &mut data, &mut tag)
        .expect("Failed to encrypt_in_place(..)");

    // CBC-MAC over every B-block, CTR over every A-block
    let expected = formatted_block_count(aad.len(), data.len()) + counter_block_count(data.len());
    assert_eq!(cipher.encrypt_block_count(), expected);
}

#[test]
fn test_encrypt_identity_cipher_tag_is_masked_xor_fold() {
    // With E(x) = x: raw tag = B0 ^ B1, S0 = A0.
    let cipher = BlockCipherMock::new(BlockCipherMockBehaviour::Identity);
    let params = params(13, 16);
    let nonce = [0u8; 13];
    let mut data = [0x10u8; 16];
    let mut tag = [0u8; 16];

    encrypt_in_place(&cipher, &params, &nonce, &[], &mut data, &mut tag)
        .expect("Failed to encrypt_in_place(..)");

    let mut b0 = [0u8; 16];
    b0[0] = params.flags(false);
    b0[15] = 16;
    let mut a0 = [0u8; 16];
    a0[0] = params.counter_flags();

    let expected: Vec<u8> = (0..16).map(|i| b0[i] ^ 0x10 ^ a0[i]).collect();
    assert_eq!(tag.to_vec(), expected);

    // S1 = A1, so ciphertext = payload ^ A1
    let mut a1 = a0;
    a1[15] = 1;
    let expected_ct: Vec<u8> = a1.iter().map(|b| b ^ 0x10).collect();
    assert_eq!(data.to_vec(), expected_ct);
}

#[test]
fn test_encrypt_rejects_wrong_tag_buffer_length() {
    let cipher = BlockCipherMock::new(BlockCipherMockBehaviour::Aes(KEY));
    let mut data = [0x11u8; 4];
    let mut tag = [0u8; 10];

    let result = encrypt_in_place(&cipher, &params(13, 8), &[0u8; 13], &[], &mut data, &mut tag);

    assert_eq!(
        result,
        Err(CcmError::Config(ConfigError::InvalidTagSize { actual: 10 }))
    );
    assert_eq!(cipher.encrypt_block_count(), 0);
}

#[test]
fn test_encrypt_leaves_buffers_untouched_on_error() {
    let cipher = BlockCipherMock::new(BlockCipherMockBehaviour::Aes(KEY));
    let mut data = vec![0x11u8; 65536];
    let mut tag = [0x22u8; 8];

    let result = encrypt_in_place(&cipher, &params(13, 8), &[0u8; 13], &[], &mut data, &mut tag);

    assert_eq!(
        result,
        Err(CcmError::Config(ConfigError::NonceTooLong {
            payload_len: 65536,
            q: 2
        }))
    );
    assert!(data.iter().all(|&b| b == 0x11));
    assert_eq!(tag, [0x22u8; 8]);
    assert_eq!(cipher.encrypt_block_count(), 0);
}
