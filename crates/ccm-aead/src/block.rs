// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Field layout shared by B0 and the counter blocks.
//!
//! ```text
//! [ flags | nonce (n_len bytes) | length or counter (q bytes) ]
//!   0       1 ..= n_len           n_len + 1 ..= 15
//! ```

use core::ops::Range;

use ccm_aead_core::consts::BLOCK_SIZE;
use ccm_aead_core::{Block, CcmParams};

use crate::BlockSequence;

pub(crate) const FLAGS_OFFSET: usize = 0;
pub(crate) const NONCE_OFFSET: usize = 1;

/// Named field ranges of a header-style block for one nonce length.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BlockLayout {
    nonce_len: usize,
}

impl BlockLayout {
    pub(crate) fn new(params: &CcmParams) -> Self {
        Self {
            nonce_len: params.nonce_len(),
        }
    }

    #[inline]
    pub(crate) fn nonce_range(&self) -> Range<usize> {
        NONCE_OFFSET..self.length_field_offset()
    }

    #[inline]
    pub(crate) fn length_field_offset(&self) -> usize {
        NONCE_OFFSET + self.nonce_len
    }

    #[inline]
    pub(crate) fn length_field_range(&self) -> Range<usize> {
        self.length_field_offset()..BLOCK_SIZE
    }

    /// Writes `[flags][nonce][value]`, `value` big-endian and right-justified
    /// into the trailing `q` bytes.
    pub(crate) fn write(&self, block: &mut Block, flags: u8, nonce: &[u8], value: u64) {
        debug_assert_eq!(nonce.len(), self.nonce_len);

        block[FLAGS_OFFSET] = flags;
        block[self.nonce_range()].copy_from_slice(nonce);
        write_be_right_justified(&mut block[self.length_field_range()], value);
    }
}

/// Writes the low `field.len()` bytes of `value` in big-endian order.
///
/// `field` is at most 8 bytes wide (q ≤ 8).
#[inline]
pub(crate) fn write_be_right_justified(field: &mut [u8], value: u64) {
    let bytes = value.to_be_bytes();
    debug_assert!(field.len() <= bytes.len());

    field.copy_from_slice(&bytes[bytes.len() - field.len()..]);
}

/// Empty sequence with room for exactly `count` blocks.
///
/// Pushing up to `count` blocks never reallocates, so no stale copy of the
/// contents is left behind in freed memory.
pub(crate) fn allocate_blocks(count: usize) -> Result<BlockSequence, ccm_aead_core::CcmError> {
    let mut blocks = Vec::new();
    blocks.try_reserve_exact(count)?;

    Ok(BlockSequence::new(blocks))
}

/// Appends a zeroed block and returns it for filling.
#[inline]
pub(crate) fn push_zeroed(blocks: &mut Vec<Block>) -> &mut Block {
    blocks.push([0u8; BLOCK_SIZE]);
    let last = blocks.len() - 1;

    &mut blocks[last]
}
