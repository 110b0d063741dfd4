// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for CCM crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod bit_flips;

pub use bit_flips::{flip_bit, for_each_bit_flip};
