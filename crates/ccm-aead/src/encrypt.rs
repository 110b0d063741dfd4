// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ccm_aead_core::consts::MAX_TAG_SIZE;
use ccm_aead_core::{BlockCipher, CcmError, CcmParams, ConfigError};
use tracing::{debug, instrument};
use zeroize::Zeroizing;

use crate::cbc_mac::{cbc_mac, truncate_into};
use crate::counter::counter_blocks;
use crate::format::format_blocks;
use crate::keystream::Keystream;

/// CCM generation-encryption, in place with a detached tag.
///
/// 1. validate tag buffer, nonce and payload length
/// 2. format B-blocks and build counter blocks
/// 3. CBC-MAC → raw tag
/// 4. keystream → S-blocks
/// 5. mask payload with S1.., mask tag with S0
///
/// Every allocation and check happens before `data` or `tag` is written, so
/// on error both buffers are untouched.
#[instrument(
    level = "debug",
    skip_all,
    fields(
        nonce_len = nonce.len(),
        aad_len = aad.len(),
        payload_len = data.len(),
        tag_len = params.tag_len()
    )
)]
pub(crate) fn encrypt_in_place<C>(
    cipher: &C,
    params: &CcmParams,
    nonce: &[u8],
    aad: &[u8],
    data: &mut [u8],
    tag: &mut [u8],
) -> Result<(), CcmError>
where
    C: BlockCipher + ?Sized,
{
    if tag.len() != params.tag_len() {
        return Err(ConfigError::InvalidTagSize { actual: tag.len() }.into());
    }

    let blocks = format_blocks(params, nonce, aad, data)?;
    let counters = counter_blocks(params, nonce, data.len())?;

    debug!(
        formatted_blocks = blocks.len(),
        counter_blocks = counters.len(),
        "formatted message"
    );

    let chain = cbc_mac(cipher, &blocks);
    let keystream = Keystream::generate(cipher, &counters)?;

    let mut raw_tag_buf = Zeroizing::new([0u8; MAX_TAG_SIZE]);
    let raw_tag = &mut raw_tag_buf[..params.tag_len()];
    truncate_into(&chain, raw_tag);

    keystream.apply(data);
    keystream.mask_tag(raw_tag);
    tag.copy_from_slice(raw_tag);

    Ok(())
}
