// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Formatting of the B-block sequence fed into the CBC-MAC.
//!
//! ```text
//! B0            = [flags | nonce | payload length (q bytes, big-endian)]
//! B1 .. Bk      = [aad length prefix | aad | zero padding]   (only if a_len > 0)
//! Bk+1 .. Bn    = [payload | zero padding]
//! ```
//!
//! The associated-data length prefix has three encodings:
//!
//! | a_len                 | prefix                            |
//! |-----------------------|-----------------------------------|
//! | `0 < a_len < 0xFF00`  | 2 bytes, big-endian               |
//! | `0xFF00 ≤ a_len < 2³²`| `FF FE` + 4 bytes, big-endian     |
//! | `2³² ≤ a_len`         | `FF FF` + 8 bytes, big-endian     |

use ccm_aead_core::consts::BLOCK_SIZE;
use ccm_aead_core::{Block, CcmError, CcmParams};

use crate::BlockSequence;
use crate::block::{BlockLayout, allocate_blocks, push_zeroed};

const MEDIUM_PREFIX_THRESHOLD: u64 = 0xFF00;
const LONG_PREFIX_THRESHOLD: u64 = 1 << 32;

const MEDIUM_PREFIX_MARKER: [u8; 2] = [0xFF, 0xFE];
const LONG_PREFIX_MARKER: [u8; 2] = [0xFF, 0xFF];

/// Largest encoded prefix, in bytes.
pub const MAX_AAD_PREFIX_SIZE: usize = 10;

/// Encoded length of the associated data, placed at the start of B1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AadLengthPrefix {
    /// `0 < a_len < 0xFF00`
    Short(u16),
    /// `0xFF00 ≤ a_len < 2^32`
    Medium(u32),
    /// `a_len ≥ 2^32`
    Long(u64),
}

impl AadLengthPrefix {
    /// Selects the encoding for `aad_len`; `None` when there is no associated data.
    pub fn for_len(aad_len: u64) -> Option<Self> {
        match aad_len {
            0 => None,
            len if len < MEDIUM_PREFIX_THRESHOLD => Some(Self::Short(len as u16)),
            len if len < LONG_PREFIX_THRESHOLD => Some(Self::Medium(len as u32)),
            len => Some(Self::Long(len)),
        }
    }

    pub fn encoded_len(&self) -> usize {
        match self {
            Self::Short(_) => 2,
            Self::Medium(_) => 6,
            Self::Long(_) => MAX_AAD_PREFIX_SIZE,
        }
    }

    /// Writes the prefix at the start of `out` and returns its length.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than [`encoded_len`](Self::encoded_len).
    pub fn encode(&self, out: &mut [u8]) -> usize {
        match *self {
            Self::Short(len) => {
                out[..2].copy_from_slice(&len.to_be_bytes());
            }
            Self::Medium(len) => {
                out[..2].copy_from_slice(&MEDIUM_PREFIX_MARKER);
                out[2..6].copy_from_slice(&len.to_be_bytes());
            }
            Self::Long(len) => {
                out[..2].copy_from_slice(&LONG_PREFIX_MARKER);
                out[2..10].copy_from_slice(&len.to_be_bytes());
            }
        }

        self.encoded_len()
    }
}

/// Number of blocks the associated data occupies, prefix and padding included.
pub fn aad_block_count(aad_len: u64) -> u64 {
    match AadLengthPrefix::for_len(aad_len) {
        Some(prefix) => (prefix.encoded_len() as u64 + aad_len).div_ceil(BLOCK_SIZE as u64),
        None => 0,
    }
}

/// Total number of B-blocks: `1 + aad blocks + ceil(p_len / 16)`.
pub fn formatted_block_count(aad_len: usize, payload_len: usize) -> usize {
    1 + aad_block_count(aad_len as u64) as usize + payload_len.div_ceil(BLOCK_SIZE)
}

/// Builds B0 alone.
///
/// # Errors
///
/// [`CcmError::Config`] if the nonce length does not match `params` or the
/// payload length does not fit in `q` bytes.
pub fn header_block(
    params: &CcmParams,
    nonce: &[u8],
    has_aad: bool,
    payload_len: usize,
) -> Result<Block, CcmError> {
    params.check_nonce(nonce)?;
    params.check_payload_len(payload_len)?;

    let mut b0 = [0u8; BLOCK_SIZE];
    BlockLayout::new(params).write(&mut b0, params.flags(has_aad), nonce, payload_len as u64);

    Ok(b0)
}

/// Builds the full B-block sequence for one message.
///
/// Validation happens before anything is allocated; the sequence is
/// allocated once, at its exact final size.
///
/// # Errors
///
/// - [`CcmError::Config`] on a nonce/payload length violation
/// - [`CcmError::Allocation`] if the sequence cannot be allocated
pub fn format_blocks(
    params: &CcmParams,
    nonce: &[u8],
    aad: &[u8],
    payload: &[u8],
) -> Result<BlockSequence, CcmError> {
    let b0 = header_block(params, nonce, !aad.is_empty(), payload.len())?;

    let count = formatted_block_count(aad.len(), payload.len());
    let mut blocks = allocate_blocks(count)?;

    *push_zeroed(&mut blocks) = b0;

    if let Some(prefix) = AadLengthPrefix::for_len(aad.len() as u64) {
        push_aad(&mut blocks, prefix, aad);
    }

    push_padded(&mut blocks, payload);

    debug_assert_eq!(blocks.len(), count);

    Ok(blocks)
}

/// First AAD block carries the prefix, the rest is plain padded chunks.
fn push_aad(blocks: &mut Vec<Block>, prefix: AadLengthPrefix, aad: &[u8]) {
    let first = push_zeroed(blocks);
    let prefix_len = prefix.encode(first);

    let head_len = (BLOCK_SIZE - prefix_len).min(aad.len());
    let (head, tail) = aad.split_at(head_len);
    first[prefix_len..prefix_len + head_len].copy_from_slice(head);

    push_padded(blocks, tail);
}

/// Splits `data` into 16-byte blocks, zero-padding the last one.
fn push_padded(blocks: &mut Vec<Block>, data: &[u8]) {
    for chunk in data.chunks(BLOCK_SIZE) {
        push_zeroed(blocks)[..chunk.len()].copy_from_slice(chunk);
    }
}
