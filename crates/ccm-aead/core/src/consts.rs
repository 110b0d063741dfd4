// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared constants for CCM.

/// Block size in bytes (128-bit block cipher)
pub const BLOCK_SIZE: usize = 16;

/// Key size in bytes (AES-128)
pub const KEY_SIZE: usize = 16;

/// Smallest accepted nonce size in bytes (q = 8)
pub const MIN_NONCE_SIZE: usize = 7;

/// Largest accepted nonce size in bytes (q = 2)
pub const MAX_NONCE_SIZE: usize = 13;

/// Smallest accepted tag size in bytes
pub const MIN_TAG_SIZE: usize = 4;

/// Largest accepted tag size in bytes
pub const MAX_TAG_SIZE: usize = 16;

/// Tags shorter than this are accepted but not recommended (RFC 3610)
pub const RECOMMENDED_MIN_TAG_SIZE: usize = 8;

/// `1 + nonce_len + q` always equals the block size.
pub const NONCE_AND_LENGTH_FIELD_SIZE: usize = BLOCK_SIZE - 1;
