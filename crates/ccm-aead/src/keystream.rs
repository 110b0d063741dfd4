// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! CTR keystream: `Si = E(Ai)`.
//!
//! S0 masks the tag, S1.. mask the payload 16 bytes at a time. Unlike the
//! CBC-MAC chain, every S-block is independent of the others.

use ccm_aead_core::consts::BLOCK_SIZE;
use ccm_aead_core::{Block, BlockCipher, CcmError};
use ccm_util::xor_in_place;

use crate::BlockSequence;
use crate::block::allocate_blocks;

/// S-blocks for one message, wiped on drop.
pub struct Keystream {
    blocks: BlockSequence,
}

impl Keystream {
    /// Encrypts every counter block. `counters` must start with A0.
    ///
    /// # Errors
    ///
    /// [`CcmError::Allocation`] if the S-block arena cannot be allocated.
    pub fn generate<C>(cipher: &C, counters: &[Block]) -> Result<Self, CcmError>
    where
        C: BlockCipher + ?Sized,
    {
        debug_assert!(!counters.is_empty());

        let mut blocks = allocate_blocks(counters.len())?;
        blocks.extend_from_slice(counters);

        for block in blocks.iter_mut() {
            cipher.encrypt_block(block);
        }

        Ok(Self { blocks })
    }

    /// Number of S-blocks, S0 included.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// S0, the tag mask.
    #[inline]
    pub fn s0(&self) -> &Block {
        &self.blocks[0]
    }

    /// S1 onwards, the payload masks.
    #[inline]
    pub fn payload_blocks(&self) -> &[Block] {
        &self.blocks[1..]
    }

    /// `tag[i] ^= S0[i]`.
    pub fn mask_tag(&self, tag: &mut [u8]) {
        xor_in_place(tag, &self.s0()[..tag.len()]);
    }

    /// `data[i] ^= S[1 + i / 16][i % 16]`; the last group is truncated.
    pub fn apply(&self, data: &mut [u8]) {
        debug_assert!(data.len().div_ceil(BLOCK_SIZE) <= self.payload_blocks().len());

        for (chunk, s) in data.chunks_mut(BLOCK_SIZE).zip(self.payload_blocks()) {
            let chunk_len = chunk.len();
            xor_in_place(chunk, &s[..chunk_len]);
        }
    }
}
