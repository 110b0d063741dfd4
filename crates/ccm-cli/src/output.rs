// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::CliError;

const WORD_SIZE: usize = 4;

/// Lowercase hex, one space after every 4-byte word.
///
/// ```text
/// [0x71, 0x62, 0x01, 0x5b, 0x4d, 0xac] -> "7162015b 4dac"
/// ```
pub fn hex_words(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2 + bytes.len() / WORD_SIZE);

    for (i, word) in bytes.chunks(WORD_SIZE).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        for b in word {
            let _ = write!(out, "{b:02x}");
        }
    }

    out
}

/// Writes raw bytes to `path`, or a hex line to `stdout` when there is no path.
pub fn emit<W: Write>(stdout: &mut W, path: Option<&Path>, bytes: &[u8]) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, bytes).map_err(CliError::io(path)),
        None => {
            writeln!(stdout, "{}", hex_words(bytes))?;
            Ok(())
        }
    }
}
