// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-128 adapter for [`BlockCipher`].

use aes::Aes128;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};

use ccm_aead_core::{Block, BlockCipher, BlockCipherInit, Key};

/// AES-128 key schedule.
///
/// Built with the `aes` crate's `zeroize` feature: the round keys are wiped
/// when the value is dropped.
pub struct Aes128Cipher {
    inner: Aes128,
}

impl BlockCipherInit for Aes128Cipher {
    fn new_from_key(key: &Key) -> Self {
        Self {
            inner: Aes128::new(GenericArray::from_slice(key)),
        }
    }
}

impl BlockCipher for Aes128Cipher {
    #[inline]
    fn encrypt_block(&self, block: &mut Block) {
        self.inner
            .encrypt_block(GenericArray::from_mut_slice(block.as_mut_slice()));
    }
}

impl core::fmt::Debug for Aes128Cipher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Aes128Cipher { .. }")
    }
}
