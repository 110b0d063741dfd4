// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Subcommand implementations.
//!
//! Every command writes its report to the given writer so it can be
//! exercised without a process boundary.

use std::io::Write;
use std::path::Path;

use ccm_aead::consts::KEY_SIZE;
use ccm_aead::counter::{counter_block, counter_block_count};
use ccm_aead::format::{formatted_block_count, header_block};
use ccm_aead::{Aes128Cipher, Ccm, CcmParams};
use tracing::{info, instrument};
use zeroize::Zeroizing;

use crate::cli::{Command, KeyedArgs, MessageArgs};
use crate::error::CliError;
use crate::input::{InputFormat, read_input, read_key, read_optional};
use crate::output::{emit, hex_words};

/// Key, nonce and associated data of one invocation.
struct Loaded {
    key: Zeroizing<[u8; KEY_SIZE]>,
    nonce: Zeroizing<Vec<u8>>,
    adata: Zeroizing<Vec<u8>>,
    ccm: Ccm<Aes128Cipher>,
}

impl Loaded {
    fn load(args: &KeyedArgs, format: InputFormat) -> Result<Self, CliError> {
        // Tag length first: it is checked before any file is opened.
        let ccm = Ccm::new(args.message.t_len)?;

        Ok(Self {
            key: read_key(&args.key, format)?,
            nonce: read_input(&args.message.nonce, format)?,
            adata: read_optional(args.message.adata.as_deref(), format)?,
            ccm,
        })
    }
}

pub fn run<W: Write>(command: &Command, format: InputFormat, stdout: &mut W) -> Result<(), CliError> {
    match command {
        Command::Encrypt {
            keyed,
            payload,
            out,
        } => encrypt(keyed, payload, out.as_deref(), format, stdout),
        Command::Decrypt {
            keyed,
            ciphertext,
            out,
        } => decrypt(keyed, ciphertext, out.as_deref(), format, stdout),
        Command::Selftest { keyed, payload } => selftest(keyed, payload, format, stdout),
        Command::Blocks {
            message,
            payload_len,
        } => blocks(message, *payload_len, format, stdout),
    }
}

#[instrument(skip_all)]
fn encrypt<W: Write>(
    args: &KeyedArgs,
    payload: &Path,
    out: Option<&Path>,
    format: InputFormat,
    stdout: &mut W,
) -> Result<(), CliError> {
    let loaded = Loaded::load(args, format)?;
    let payload = read_input(payload, format)?;

    let ciphertext = loaded
        .ccm
        .encrypt(&*loaded.key, &loaded.nonce, &loaded.adata, &payload)?;

    emit(stdout, out, &ciphertext)
}

#[instrument(skip_all)]
fn decrypt<W: Write>(
    args: &KeyedArgs,
    ciphertext: &Path,
    out: Option<&Path>,
    format: InputFormat,
    stdout: &mut W,
) -> Result<(), CliError> {
    let loaded = Loaded::load(args, format)?;
    let ciphertext = read_input(ciphertext, format)?;

    let plaintext = Zeroizing::new(loaded.ccm.decrypt(
        &*loaded.key,
        &loaded.nonce,
        &loaded.adata,
        &ciphertext,
    )?);

    emit(stdout, out, &plaintext)
}

/// Encrypt-then-verify with a size report, ending in "Decryption verified!".
#[instrument(skip_all)]
fn selftest<W: Write>(
    args: &KeyedArgs,
    payload: &Path,
    format: InputFormat,
    stdout: &mut W,
) -> Result<(), CliError> {
    let loaded = Loaded::load(args, format)?;
    let payload = read_input(payload, format)?;

    writeln!(stdout, "size of associated data: {} bytes", loaded.adata.len())?;
    writeln!(stdout, "size of key: {} bytes", loaded.key.len())?;
    writeln!(stdout, "size of payload: {} bytes", payload.len())?;
    writeln!(stdout, "size of nonce: {} bytes", loaded.nonce.len())?;

    let ciphertext = loaded
        .ccm
        .encrypt(&*loaded.key, &loaded.nonce, &loaded.adata, &payload)?;

    writeln!(stdout)?;
    writeln!(stdout, "C:\t{}", hex_words(&ciphertext))?;

    let recovered = Zeroizing::new(loaded.ccm.decrypt(
        &*loaded.key,
        &loaded.nonce,
        &loaded.adata,
        &ciphertext,
    )?);

    debug_assert_eq!(recovered.as_slice(), payload.as_slice());

    info!(ciphertext_len = ciphertext.len(), "selftest passed");
    writeln!(stdout, "Decryption verified!")?;

    Ok(())
}

/// Prints B0, A0 and the block counts. Keystream and tag are never shown.
#[instrument(skip_all, fields(payload_len = payload_len))]
fn blocks<W: Write>(
    args: &MessageArgs,
    payload_len: usize,
    format: InputFormat,
    stdout: &mut W,
) -> Result<(), CliError> {
    let nonce = read_input(&args.nonce, format)?;
    let adata = read_optional(args.adata.as_deref(), format)?;
    let params = CcmParams::new(nonce.len(), args.t_len)?;

    let b0 = header_block(&params, &nonce, !adata.is_empty(), payload_len)?;
    let a0 = counter_block(&params, &nonce, 0)?;

    writeln!(stdout, "q: {}", params.q())?;
    writeln!(stdout, "B0:\t{}", hex_words(&b0))?;
    writeln!(stdout, "A0:\t{}", hex_words(&a0))?;
    writeln!(
        stdout,
        "B-blocks: {}",
        formatted_block_count(adata.len(), payload_len)
    )?;
    writeln!(stdout, "A-blocks: {}", counter_block_count(payload_len))?;

    Ok(())
}
