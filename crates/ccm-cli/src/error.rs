// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::PathBuf;

use ccm_aead::{CcmError, ConfigError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output")]
    Output(#[from] std::io::Error),

    #[error(transparent)]
    Ccm(#[from] CcmError),

    #[error("invalid hex in {path}: {reason}")]
    InvalidHex { path: PathBuf, reason: &'static str },
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Ccm(e.into())
    }
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| CliError::Io { path, source }
    }
}
