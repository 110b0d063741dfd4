// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core building blocks shared by the CCM crates.
//!
//! - [`BlockCipher`]: the single capability CCM needs from a 128-bit cipher.
//! - [`CcmParams`]: validated nonce/tag lengths and the flag bytes derived from them.
//! - [`CcmError`] / [`ConfigError`]: the error taxonomy.

#[cfg(test)]
mod tests;

pub mod consts;

mod error;
mod params;
mod traits;

pub use error::{CcmError, ConfigError};
pub use params::{CcmParams, min_length_field_width};
pub use traits::{BlockCipher, BlockCipherInit};

/// A single 16-byte cipher block.
pub type Block = [u8; consts::BLOCK_SIZE];

/// A 128-bit block cipher key.
pub type Key = [u8; consts::KEY_SIZE];
