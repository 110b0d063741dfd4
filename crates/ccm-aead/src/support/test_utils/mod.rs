// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod block_cipher_mock;

pub use block_cipher_mock::{BlockCipherMock, BlockCipherMockBehaviour};
