// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mock block cipher for testing.

use core::cell::Cell;

use ccm_aead_core::{Block, BlockCipher, BlockCipherInit, Key};

use crate::aes128::Aes128Cipher;

/// Mock cipher behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCipherMockBehaviour {
    /// `E(x) = x`. Makes CBC-MAC a plain XOR fold and CTR a copy of the
    /// counter blocks, so intermediate values can be checked by hand.
    Identity,
    /// Real AES-128 under the given key.
    Aes(Key),
}

/// Block cipher that counts its invocations.
pub struct BlockCipherMock {
    behaviour: BlockCipherMockBehaviour,
    aes: Option<Aes128Cipher>,
    encrypt_block_count: Cell<usize>,
}

impl BlockCipherMock {
    pub fn new(behaviour: BlockCipherMockBehaviour) -> Self {
        let aes = match behaviour {
            BlockCipherMockBehaviour::Identity => None,
            BlockCipherMockBehaviour::Aes(key) => Some(Aes128Cipher::new_from_key(&key)),
        };

        Self {
            behaviour,
            aes,
            encrypt_block_count: Cell::new(0),
        }
    }

    #[inline]
    pub fn behaviour(&self) -> BlockCipherMockBehaviour {
        self.behaviour
    }

    /// Number of `encrypt_block` calls since creation or the last reset.
    #[inline]
    pub fn encrypt_block_count(&self) -> usize {
        self.encrypt_block_count.get()
    }

    pub fn reset_count(&self) {
        self.encrypt_block_count.set(0);
    }
}

impl BlockCipher for BlockCipherMock {
    fn encrypt_block(&self, block: &mut Block) {
        self.encrypt_block_count
            .set(self.encrypt_block_count.get() + 1);

        if let Some(aes) = &self.aes {
            aes.encrypt_block(block);
        }
    }
}

impl BlockCipherInit for BlockCipherMock {
    /// Keyed construction always yields the AES behaviour.
    fn new_from_key(key: &Key) -> Self {
        Self::new(BlockCipherMockBehaviour::Aes(*key))
    }
}
