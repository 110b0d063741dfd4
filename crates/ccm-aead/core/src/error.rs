// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! CCM error types.

use std::collections::TryReserveError;

/// Parameter errors, detected before any cryptographic work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid key size: expected 16 bytes, got {actual}")]
    InvalidKeySize { actual: usize },

    #[error("invalid nonce size: expected 7 to 13 bytes, got {actual}")]
    InvalidNonceSize { actual: usize },

    #[error("invalid tag size: expected one of 4, 6, 8, 10, 12, 14, 16, got {actual}")]
    InvalidTagSize { actual: usize },

    /// The payload length does not fit in the `q`-byte length field left by the nonce.
    #[error("nonce is too long for payload size: {payload_len} bytes need more than {q} length bytes")]
    NonceTooLong { payload_len: usize, q: usize },
}

/// Errors that can occur during CCM encryption or decryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CcmError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Ciphertext is too short to carry a tag of the configured length
    #[error("ciphertext too short: {len} bytes cannot hold a {tag_len}-byte tag")]
    CiphertextTooShort { len: usize, tag_len: usize },

    /// Authentication tag verification failed (ciphertext, AAD or nonce was modified)
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailed,

    #[error("allocation failed while building block sequences")]
    Allocation,
}

impl CcmError {
    /// Invalid key, nonce or tag length, or a payload too large for the nonce.
    pub fn is_config(&self) -> bool {
        matches!(self, CcmError::Config(_))
    }

    /// Input that cannot be a CCM ciphertext at all.
    pub fn is_malformed(&self) -> bool {
        matches!(self, CcmError::CiphertextTooShort { .. })
    }

    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, CcmError::AuthenticationFailed)
    }
}

impl From<TryReserveError> for CcmError {
    fn from(_: TryReserveError) -> Self {
        CcmError::Allocation
    }
}
