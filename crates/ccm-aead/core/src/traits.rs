// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block cipher trait definitions.

use crate::{Block, Key};

/// Keyed 128-bit block cipher, forward direction only.
///
/// CCM never decrypts a block: both the CBC-MAC chain and the CTR keystream
/// use the encryption direction.
pub trait BlockCipher {
    /// Encrypts one block in place.
    fn encrypt_block(&self, block: &mut Block);
}

/// Block cipher that can be keyed from raw key bytes.
///
/// Orchestrators build the key schedule at the start of a call and drop it
/// before returning.
pub trait BlockCipherInit: BlockCipher + Sized {
    fn new_from_key(key: &Key) -> Self;
}

impl<T: BlockCipher + ?Sized> BlockCipher for &T {
    #[inline]
    fn encrypt_block(&self, block: &mut Block) {
        (**self).encrypt_block(block)
    }
}
