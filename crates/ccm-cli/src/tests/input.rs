// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fs;

use ccm_aead::{CcmError, ConfigError};

use crate::error::CliError;
use crate::input::{InputFormat, decode_hex, read_input, read_key, read_optional};

// =============================================================================
// decode_hex()
// =============================================================================

#[test]
fn test_decode_hex_mixed_case_and_whitespace() {
    let bytes = decode_hex(b"DEad be\nEF\t00").expect("Failed to decode_hex(..)");
    assert_eq!(bytes.as_slice(), [0xde, 0xad, 0xbe, 0xef, 0x00]);
}

#[test]
fn test_decode_hex_empty() {
    let bytes = decode_hex(b"  \n").expect("Failed to decode_hex(..)");
    assert!(bytes.is_empty());
}

#[test]
fn test_decode_hex_rejects_odd_digits() {
    assert_eq!(decode_hex(b"abc").err(), Some("odd number of hex digits"));
}

#[test]
fn test_decode_hex_rejects_non_hex() {
    assert_eq!(decode_hex(b"zz").err(), Some("non-hex character"));
}

// =============================================================================
// read_*()
// =============================================================================

#[test]
fn test_read_input_raw_and_hex() {
    let dir = tempfile::tempdir().expect("Failed to create tempdir");
    let raw = dir.path().join("raw.bin");
    let hex = dir.path().join("hex.txt");
    fs::write(&raw, [0x00, 0xFF, 0x10]).expect("Failed to write raw.bin");
    fs::write(&hex, "00ff10\n").expect("Failed to write hex.txt");

    let from_raw = read_input(&raw, InputFormat::Raw).expect("Failed to read_input(..)");
    let from_hex = read_input(&hex, InputFormat::Hex).expect("Failed to read_input(..)");

    assert_eq!(from_raw.as_slice(), [0x00, 0xFF, 0x10]);
    assert_eq!(from_raw.as_slice(), from_hex.as_slice());
}

#[test]
fn test_read_input_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create tempdir");
    let missing = dir.path().join("missing");

    let result = read_input(&missing, InputFormat::Raw);

    assert!(matches!(result, Err(CliError::Io { path, .. }) if path == missing));
}

#[test]
fn test_read_input_invalid_hex_names_file() {
    let dir = tempfile::tempdir().expect("Failed to create tempdir");
    let path = dir.path().join("nonce.txt");
    fs::write(&path, "0102g3").expect("Failed to write nonce.txt");

    let result = read_input(&path, InputFormat::Hex);

    assert!(matches!(
        result,
        Err(CliError::InvalidHex { path: p, reason: "non-hex character" }) if p == path
    ));
}

#[test]
fn test_read_optional_none_is_empty() {
    let bytes = read_optional(None, InputFormat::Raw).expect("Failed to read_optional(..)");
    assert!(bytes.is_empty());
}

#[test]
fn test_read_key_requires_16_bytes() {
    let dir = tempfile::tempdir().expect("Failed to create tempdir");
    let good = dir.path().join("good.key");
    let bad = dir.path().join("bad.key");
    fs::write(&good, [0x42u8; 16]).expect("Failed to write good.key");
    fs::write(&bad, [0x42u8; 15]).expect("Failed to write bad.key");

    let key = read_key(&good, InputFormat::Raw).expect("Failed to read_key(..)");
    assert_eq!(*key, [0x42u8; 16]);

    let result = read_key(&bad, InputFormat::Raw);
    assert!(matches!(
        result,
        Err(CliError::Ccm(CcmError::Config(ConfigError::InvalidKeySize { actual: 15 })))
    ));
}
