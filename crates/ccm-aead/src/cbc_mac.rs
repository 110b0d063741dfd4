// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! CBC-MAC over the formatted B-blocks.
//!
//! ```text
//! Y0 = E(B0)
//! Yi = E(Bi ⊕ Yi-1)
//! T  = MSB_t_len(Yn)
//! ```
//!
//! Each step needs the previous output, so the chain is strictly sequential.

use ccm_aead_core::consts::BLOCK_SIZE;
use ccm_aead_core::{Block, BlockCipher};
use ccm_util::xor_in_place;
use zeroize::Zeroizing;

/// Runs the chain over `blocks` and returns the final chaining value `Yn`.
///
/// Folding from an all-zero value makes the first step `E(B0 ⊕ 0) = E(B0)`.
/// `blocks` is never empty in CCM (B0 is always present).
pub fn cbc_mac<C>(cipher: &C, blocks: &[Block]) -> Zeroizing<Block>
where
    C: BlockCipher + ?Sized,
{
    debug_assert!(!blocks.is_empty());

    blocks
        .iter()
        .fold(Zeroizing::new([0u8; BLOCK_SIZE]), |mut chain, block| {
            xor_in_place(chain.as_mut_slice(), block);
            cipher.encrypt_block(&mut chain);
            chain
        })
}

/// Copies the first `tag.len()` bytes of the chaining value into `tag`.
#[inline]
pub fn truncate_into(chain: &Block, tag: &mut [u8]) {
    tag.copy_from_slice(&chain[..tag.len()]);
}
