// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Validated CCM parameters and the flag bytes derived from them.
//!
//! Flags byte layout (bits 7..0):
//! ```text
//!   7    : reserved, always 0
//!   6    : Adata (1 if a_len > 0)
//!   5-3  : (t_len - 2) / 2
//!   2-0  : q - 1
//! ```
//! Counter blocks keep only bits 2-0.

use crate::consts::{
    MAX_NONCE_SIZE, MAX_TAG_SIZE, MIN_NONCE_SIZE, MIN_TAG_SIZE, NONCE_AND_LENGTH_FIELD_SIZE,
};
use crate::error::ConfigError;

const ADATA_FLAG: u8 = 0b0100_0000;
const TAG_FIELD_SHIFT: u32 = 3;
const Q_FIELD_MASK: u8 = 0b0000_0111;

/// Nonce and tag lengths that passed validation.
///
/// Every call derives its own `CcmParams` from the nonce it receives, so the
/// length-field width `q` always matches the nonce actually used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CcmParams {
    nonce_len: usize,
    tag_len: usize,
}

impl CcmParams {
    /// Validates `nonce_len` ∈ [7, 13] and `tag_len` ∈ {4, 6, ..., 16}.
    pub fn new(nonce_len: usize, tag_len: usize) -> Result<Self, ConfigError> {
        Self::validate_tag_len(tag_len)?;

        if !(MIN_NONCE_SIZE..=MAX_NONCE_SIZE).contains(&nonce_len) {
            return Err(ConfigError::InvalidNonceSize { actual: nonce_len });
        }

        Ok(Self { nonce_len, tag_len })
    }

    pub fn validate_tag_len(tag_len: usize) -> Result<(), ConfigError> {
        if !(MIN_TAG_SIZE..=MAX_TAG_SIZE).contains(&tag_len) || tag_len % 2 != 0 {
            return Err(ConfigError::InvalidTagSize { actual: tag_len });
        }

        Ok(())
    }

    #[inline]
    pub fn nonce_len(&self) -> usize {
        self.nonce_len
    }

    #[inline]
    pub fn tag_len(&self) -> usize {
        self.tag_len
    }

    /// Width in bytes of the payload-length field and of the counter field.
    #[inline]
    pub fn q(&self) -> usize {
        NONCE_AND_LENGTH_FIELD_SIZE - self.nonce_len
    }

    /// Flags byte of B0.
    pub fn flags(&self, has_aad: bool) -> u8 {
        let adata = if has_aad { ADATA_FLAG } else { 0 };
        let t = ((self.tag_len - 2) / 2) as u8;

        adata | (t << TAG_FIELD_SHIFT) | self.counter_flags()
    }

    /// Flags byte of every counter block: `q - 1` and nothing else.
    pub fn counter_flags(&self) -> u8 {
        (self.q() - 1) as u8 & Q_FIELD_MASK
    }

    /// Fails if `nonce` is not exactly `nonce_len` bytes.
    pub fn check_nonce(&self, nonce: &[u8]) -> Result<(), ConfigError> {
        if nonce.len() != self.nonce_len {
            return Err(ConfigError::InvalidNonceSize {
                actual: nonce.len(),
            });
        }

        Ok(())
    }

    /// Fails if `payload_len` cannot be represented in `q` bytes.
    pub fn check_payload_len(&self, payload_len: usize) -> Result<(), ConfigError> {
        let q = self.q();

        if min_length_field_width(payload_len) > q {
            return Err(ConfigError::NonceTooLong { payload_len, q });
        }

        Ok(())
    }
}

/// Minimum number of bytes able to represent `len`: `ceil(bit_length(len) / 8)`.
///
/// Zero needs no bytes at all.
#[inline]
pub fn min_length_field_width(len: usize) -> usize {
    let bits = (usize::BITS - len.leading_zeros()) as usize;
    bits.div_ceil(8)
}
