// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Public CCM entry points.

use core::marker::PhantomData;

use ccm_aead_core::consts::RECOMMENDED_MIN_TAG_SIZE;
use ccm_aead_core::{BlockCipherInit, CcmError, CcmParams, ConfigError, Key};
use tracing::warn;
use zeroize::Zeroize;

use crate::aes128::Aes128Cipher;
use crate::decrypt::decrypt_in_place;
use crate::encrypt::encrypt_in_place;

/// CCM with a fixed tag length over block cipher `C` (AES-128 by default).
///
/// Holds no key material: the key schedule is built at the start of every
/// call and dropped before it returns. The nonce length (and therefore `q`)
/// is taken from the nonce passed to each call.
pub struct Ccm<C = Aes128Cipher> {
    tag_len: usize,
    _cipher: PhantomData<fn() -> C>,
}

impl<C> Clone for Ccm<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Ccm<C> {}

impl<C> core::fmt::Debug for Ccm<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ccm")
            .field("tag_len", &self.tag_len)
            .finish()
    }
}

impl<C: BlockCipherInit> Ccm<C> {
    /// Creates a CCM instance producing `tag_len`-byte tags.
    ///
    /// Valid `tag_len` values are: 4, 6, 8, 10, 12, 14, 16. Values below 8
    /// are accepted but logged as a warning.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidTagSize`] for any other value.
    pub fn new(tag_len: usize) -> Result<Self, CcmError> {
        CcmParams::validate_tag_len(tag_len)?;

        if tag_len < RECOMMENDED_MIN_TAG_SIZE {
            warn!(tag_len, "MAC length less than 64 bits is not recommended");
        }

        Ok(Self {
            tag_len,
            _cipher: PhantomData,
        })
    }

    #[inline]
    pub fn tag_size(&self) -> usize {
        self.tag_len
    }

    fn params(&self, nonce: &[u8]) -> Result<CcmParams, CcmError> {
        Ok(CcmParams::new(nonce.len(), self.tag_len)?)
    }

    fn cipher(key: &[u8]) -> Result<C, CcmError> {
        let key: &Key = key
            .try_into()
            .map_err(|_| ConfigError::InvalidKeySize { actual: key.len() })?;

        Ok(C::new_from_key(key))
    }

    /// Encrypts `payload` and returns `ciphertext || tag`.
    ///
    /// # Errors
    ///
    /// - [`CcmError::Config`] for an invalid key or nonce length, or a payload
    ///   too long for the nonce (`p_len ≥ 2^(8·q)`)
    /// - [`CcmError::Allocation`] if the output or block buffers cannot be allocated
    pub fn encrypt(
        &self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        payload: &[u8],
    ) -> Result<Vec<u8>, CcmError> {
        let params = self.params(nonce)?;
        params.check_payload_len(payload.len())?;
        let cipher = Self::cipher(key)?;

        let mut out = Vec::new();
        out.try_reserve_exact(payload.len() + self.tag_len)?;
        out.extend_from_slice(payload);
        out.resize(payload.len() + self.tag_len, 0);

        let (data, tag) = out.split_at_mut(payload.len());

        if let Err(e) = encrypt_in_place(&cipher, &params, nonce, aad, data, tag) {
            out.zeroize();
            return Err(e);
        }

        Ok(out)
    }

    /// Verifies and decrypts `ciphertext || tag`, returning the plaintext.
    ///
    /// # Errors
    ///
    /// - [`CcmError::Config`] for an invalid key or nonce length, or a body
    ///   too long for the nonce
    /// - [`CcmError::CiphertextTooShort`] if the input is shorter than the tag
    /// - [`CcmError::AuthenticationFailed`] if the tag does not match; no
    ///   plaintext is returned
    /// - [`CcmError::Allocation`] if buffers cannot be allocated
    pub fn decrypt(
        &self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        ciphertext_with_tag: &[u8],
    ) -> Result<Vec<u8>, CcmError> {
        let params = self.params(nonce)?;

        if ciphertext_with_tag.len() < self.tag_len {
            return Err(CcmError::CiphertextTooShort {
                len: ciphertext_with_tag.len(),
                tag_len: self.tag_len,
            });
        }

        let (ciphertext, tag) = ciphertext_with_tag.split_at(ciphertext_with_tag.len() - self.tag_len);
        params.check_payload_len(ciphertext.len())?;
        let cipher = Self::cipher(key)?;

        let mut plaintext = Vec::new();
        plaintext.try_reserve_exact(ciphertext.len())?;
        plaintext.extend_from_slice(ciphertext);

        // On failure the buffer has already been wiped.
        decrypt_in_place(&cipher, &params, nonce, aad, &mut plaintext, tag)?;

        Ok(plaintext)
    }

    /// Encrypts `data` in place and writes the tag into `tag`.
    ///
    /// `tag` must be exactly [`tag_size`](Self::tag_size) bytes. On error
    /// neither buffer is modified.
    pub fn encrypt_in_place_detached(
        &self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8],
    ) -> Result<(), CcmError> {
        let params = self.params(nonce)?;
        let cipher = Self::cipher(key)?;

        encrypt_in_place(&cipher, &params, nonce, aad, data, tag)
    }

    /// Verifies `tag` and decrypts `data` in place.
    ///
    /// On [`CcmError::AuthenticationFailed`] `data` is zeroized.
    pub fn decrypt_in_place_detached(
        &self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8],
    ) -> Result<(), CcmError> {
        let params = self.params(nonce)?;
        let cipher = Self::cipher(key)?;

        decrypt_in_place(&cipher, &params, nonce, aad, data, tag)
    }
}

/// Encrypts with AES-128-CCM, returning `ciphertext || tag`.
///
/// # Arguments
/// - `key`: 16-byte key
/// - `nonce`: 7 to 13 bytes, unique per message under `key`
/// - `aad`: associated data (authenticated, not encrypted)
/// - `payload`: data to encrypt
/// - `tag_len`: 4, 6, 8, 10, 12, 14 or 16
pub fn ccm_encrypt(
    key: &[u8],
    nonce: &[u8],
    aad: &[u8],
    payload: &[u8],
    tag_len: usize,
) -> Result<Vec<u8>, CcmError> {
    Ccm::<Aes128Cipher>::new(tag_len)?.encrypt(key, nonce, aad, payload)
}

/// Verifies and decrypts AES-128-CCM `ciphertext || tag`.
///
/// # Returns
/// - `Ok(plaintext)` if authentication succeeds
/// - `Err(CcmError::AuthenticationFailed)` otherwise (no plaintext is returned)
pub fn ccm_decrypt(
    key: &[u8],
    nonce: &[u8],
    aad: &[u8],
    ciphertext_with_tag: &[u8],
    tag_len: usize,
) -> Result<Vec<u8>, CcmError> {
    Ccm::<Aes128Cipher>::new(tag_len)?.decrypt(key, nonce, aad, ciphertext_with_tag)
}
