// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const DEFAULT_TAG_LEN: usize = 8;

#[derive(Debug, Parser)]
#[command(name = "ccm", version, about = "AES-128-CCM authenticated encryption")]
pub struct Cli {
    /// Log debug events (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Input files hold hex text instead of raw bytes
    #[arg(long, global = true)]
    pub hex: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encrypt a payload file, producing ciphertext || tag
    Encrypt {
        #[command(flatten)]
        keyed: KeyedArgs,

        /// Payload file
        #[arg(short, long)]
        payload: PathBuf,

        /// Write raw output here instead of printing hex
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Verify and decrypt a ciphertext || tag file
    Decrypt {
        #[command(flatten)]
        keyed: KeyedArgs,

        /// Ciphertext file (tag appended)
        #[arg(short, long)]
        ciphertext: PathBuf,

        /// Write raw plaintext here instead of printing hex
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Encrypt, print the ciphertext, then decrypt and verify it
    Selftest {
        #[command(flatten)]
        keyed: KeyedArgs,

        /// Payload file
        #[arg(short, long)]
        payload: PathBuf,
    },

    /// Print the public B0 and A0 blocks for a message shape
    Blocks {
        #[command(flatten)]
        message: MessageArgs,

        /// Payload length in bytes
        #[arg(long)]
        payload_len: usize,
    },
}

/// Inputs shared by every subcommand.
#[derive(Debug, Args)]
pub struct MessageArgs {
    /// Nonce file (7 to 13 bytes)
    #[arg(short, long)]
    pub nonce: PathBuf,

    /// Associated data file
    #[arg(short, long)]
    pub adata: Option<PathBuf>,

    /// MAC length in bytes: 4, 6, 8, 10, 12, 14 or 16
    #[arg(short, long = "t-len", default_value_t = DEFAULT_TAG_LEN)]
    pub t_len: usize,
}

#[derive(Debug, Args)]
pub struct KeyedArgs {
    /// Key file (16 bytes)
    #[arg(short, long)]
    pub key: PathBuf,

    #[command(flatten)]
    pub message: MessageArgs,
}
