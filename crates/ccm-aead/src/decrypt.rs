// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ccm_aead_core::consts::MAX_TAG_SIZE;
use ccm_aead_core::{BlockCipher, CcmError, CcmParams, ConfigError};
use ccm_util::constant_time_eq;
use tracing::{debug, instrument};
use zeroize::{Zeroize, Zeroizing};

use crate::cbc_mac::{cbc_mac, truncate_into};
use crate::counter::counter_blocks;
use crate::format::format_blocks;
use crate::keystream::Keystream;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecryptStage {
    /// Counter blocks and keystream.
    Setup,
    /// Plaintext and received tag unmasked.
    Recover,
    /// B-blocks rebuilt from the recovered plaintext, tag recomputed and compared.
    Verify,
}

/// CCM decryption-verification, in place with a detached tag.
///
/// On success `data` holds the plaintext. On failure `data` holds no
/// plaintext: it is either untouched (errors before recovery) or zeroized.
pub(crate) fn decrypt_in_place<C>(
    cipher: &C,
    params: &CcmParams,
    nonce: &[u8],
    aad: &[u8],
    data: &mut [u8],
    tag: &[u8],
) -> Result<(), CcmError>
where
    C: BlockCipher + ?Sized,
{
    decrypt_in_place_with(cipher, params, nonce, aad, data, tag, |_, _| {})
}

/// Same as [`decrypt_in_place`], reporting each stage to `f` before it runs.
///
/// `f` also receives the buffer as it stands at that point.
#[instrument(
    level = "debug",
    skip_all,
    fields(
        nonce_len = nonce.len(),
        aad_len = aad.len(),
        ciphertext_len = data.len(),
        tag_len = params.tag_len()
    )
)]
pub(crate) fn decrypt_in_place_with<C, F>(
    cipher: &C,
    params: &CcmParams,
    nonce: &[u8],
    aad: &[u8],
    data: &mut [u8],
    tag: &[u8],
    mut f: F,
) -> Result<(), CcmError>
where
    C: BlockCipher + ?Sized,
    F: FnMut(DecryptStage, &[u8]),
{
    // Stage: Setup
    let keystream = {
        f(DecryptStage::Setup, data);

        if tag.len() != params.tag_len() {
            return Err(ConfigError::InvalidTagSize { actual: tag.len() }.into());
        }

        let counters = counter_blocks(params, nonce, data.len())?;
        Keystream::generate(cipher, &counters)?
    };

    // Stage: Recover
    let mut received_tag_buf = Zeroizing::new([0u8; MAX_TAG_SIZE]);
    let received_tag = &mut received_tag_buf[..params.tag_len()];
    {
        f(DecryptStage::Recover, data);

        keystream.apply(data);
        received_tag.copy_from_slice(tag);
        keystream.mask_tag(received_tag);
    }

    // Stage: Verify
    {
        f(DecryptStage::Verify, data);

        let blocks = match format_blocks(params, nonce, aad, data) {
            Ok(blocks) => blocks,
            Err(e) => {
                data.zeroize();
                return Err(e);
            }
        };

        debug!(formatted_blocks = blocks.len(), "recomputing tag");

        let chain = cbc_mac(cipher, &blocks);
        let mut expected_tag_buf = Zeroizing::new([0u8; MAX_TAG_SIZE]);
        let expected_tag = &mut expected_tag_buf[..params.tag_len()];
        truncate_into(&chain, expected_tag);

        if !constant_time_eq(expected_tag, received_tag) {
            data.zeroize();
            debug!("tag mismatch, recovered plaintext discarded");
            return Err(CcmError::AuthenticationFailed);
        }
    }

    Ok(())
}
