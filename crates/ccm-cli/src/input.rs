// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Loading of key, nonce, associated data and payload files.

use std::fs;
use std::path::Path;

use ccm_aead::ConfigError;
use ccm_aead::consts::KEY_SIZE;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::CliError;

/// How input files are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Raw,
    /// Hex digits, ASCII whitespace ignored
    Hex,
}

/// Reads a whole file, decoding it according to `format`.
pub fn read_input(path: &Path, format: InputFormat) -> Result<Zeroizing<Vec<u8>>, CliError> {
    let raw = Zeroizing::new(fs::read(path).map_err(CliError::io(path))?);

    let bytes = match format {
        InputFormat::Raw => raw,
        InputFormat::Hex => decode_hex(&raw).map_err(|reason| CliError::InvalidHex {
            path: path.to_path_buf(),
            reason,
        })?,
    };

    debug!(path = %path.display(), len = bytes.len(), "loaded input");

    Ok(bytes)
}

/// Reads an optional file; a missing path means empty input.
pub fn read_optional(
    path: Option<&Path>,
    format: InputFormat,
) -> Result<Zeroizing<Vec<u8>>, CliError> {
    match path {
        Some(path) => read_input(path, format),
        None => Ok(Zeroizing::new(Vec::new())),
    }
}

/// Reads a key file, which must hold exactly 16 bytes.
pub fn read_key(path: &Path, format: InputFormat) -> Result<Zeroizing<[u8; KEY_SIZE]>, CliError> {
    let bytes = read_input(path, format)?;

    let key: [u8; KEY_SIZE] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| ConfigError::InvalidKeySize {
            actual: bytes.len(),
        })?;

    Ok(Zeroizing::new(key))
}

/// Decodes hex text, skipping ASCII whitespace.
pub fn decode_hex(text: &[u8]) -> Result<Zeroizing<Vec<u8>>, &'static str> {
    let mut out = Zeroizing::new(Vec::with_capacity(text.len() / 2));
    let mut high: Option<u8> = None;

    for &c in text.iter().filter(|c| !c.is_ascii_whitespace()) {
        let nibble = match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            b'A'..=b'F' => c - b'A' + 10,
            _ => return Err("non-hex character"),
        };

        high = match high {
            Some(h) => {
                out.push((h << 4) | nibble);
                None
            }
            None => Some(nibble),
        };
    }

    if high.is_some() {
        return Err("odd number of hex digits");
    }

    Ok(out)
}
