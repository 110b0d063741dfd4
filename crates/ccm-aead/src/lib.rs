// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-128-CCM (Counter with CBC-MAC) authenticated encryption.
//!
//! CCM is defined in [RFC 3610] and [NIST SP 800-38C]. A message is
//! authenticated with a CBC-MAC over formatted blocks (B0, associated data,
//! payload) and encrypted with CTR mode over counter blocks (A0, A1, ...).
//! A0's keystream block masks the tag.
//!
//! ## Usage
//!
//! ```
//! use ccm_aead::{ccm_decrypt, ccm_encrypt};
//!
//! let key = [0x42u8; 16];
//! let nonce = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
//! let aad = b"header";
//!
//! let ciphertext = ccm_encrypt(&key, &nonce, aad, b"attack at dawn", 8)?;
//! assert_eq!(ciphertext.len(), 14 + 8);
//!
//! let plaintext = ccm_decrypt(&key, &nonce, aad, &ciphertext, 8)?;
//! assert_eq!(plaintext, b"attack at dawn");
//! # Ok::<(), ccm_aead::CcmError>(())
//! ```
//!
//! ## Parameters
//!
//! - key: 16 bytes
//! - nonce: 7 to 13 bytes; a 13-byte nonce limits the payload to 65535 bytes
//! - tag: 4, 6, 8, 10, 12, 14 or 16 bytes
//!
//! Reusing a nonce under the same key destroys the security of CCM.
//!
//! [RFC 3610]: https://tools.ietf.org/html/rfc3610
//! [NIST SP 800-38C]: https://csrc.nist.gov/publications/detail/sp/800-38c/final

#[cfg(test)]
mod tests;

pub mod cbc_mac;
pub mod counter;
pub mod format;
pub mod keystream;

mod aes128;
mod block;
mod ccm;
mod decrypt;
mod encrypt;
mod support;

pub use aes128::Aes128Cipher;
pub use ccm::{Ccm, ccm_decrypt, ccm_encrypt};
pub use ccm_aead_core::consts;
pub use ccm_aead_core::{
    Block, BlockCipher, BlockCipherInit, CcmError, CcmParams, ConfigError, Key,
};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils::{BlockCipherMock, BlockCipherMockBehaviour};

/// Owned sequence of blocks, wiped on drop.
///
/// B-blocks carry plaintext and S-blocks carry keystream, so every sequence
/// is zeroized when the call that built it returns.
pub type BlockSequence = zeroize::Zeroizing<Vec<Block>>;
