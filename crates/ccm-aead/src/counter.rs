// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Counter blocks (A-blocks) for the CTR keystream.
//!
//! ```text
//! Ai = [q - 1 | nonce | i (q bytes, big-endian)]
//! ```
//!
//! Counter flags never carry the Adata or tag-length bits.

use ccm_aead_core::consts::BLOCK_SIZE;
use ccm_aead_core::{Block, CcmError, CcmParams};

use crate::BlockSequence;
use crate::block::{BlockLayout, allocate_blocks, push_zeroed};

/// `1 + ceil(p_len / 16)`: A0 for the tag plus one block per payload chunk.
#[inline]
pub fn counter_block_count(payload_len: usize) -> usize {
    1 + payload_len.div_ceil(BLOCK_SIZE)
}

/// Builds the single counter block `A_index`.
///
/// # Errors
///
/// [`CcmError::Config`] if the nonce length does not match `params`.
pub fn counter_block(params: &CcmParams, nonce: &[u8], index: u64) -> Result<Block, CcmError> {
    params.check_nonce(nonce)?;

    let mut block = [0u8; BLOCK_SIZE];
    BlockLayout::new(params).write(&mut block, params.counter_flags(), nonce, index);

    Ok(block)
}

/// Builds `A0 .. A(num_ctr - 1)` for a payload of `payload_len` bytes.
///
/// The payload-length check guarantees every index fits in the `q`-byte
/// counter field.
///
/// # Errors
///
/// - [`CcmError::Config`] on a nonce/payload length violation
/// - [`CcmError::Allocation`] if the sequence cannot be allocated
pub fn counter_blocks(
    params: &CcmParams,
    nonce: &[u8],
    payload_len: usize,
) -> Result<BlockSequence, CcmError> {
    params.check_nonce(nonce)?;
    params.check_payload_len(payload_len)?;

    let count = counter_block_count(payload_len);
    let mut blocks = allocate_blocks(count)?;

    let layout = BlockLayout::new(params);
    let flags = params.counter_flags();

    for index in 0..count {
        layout.write(push_zeroed(&mut blocks), flags, nonce, index as u64);
    }

    Ok(blocks)
}
