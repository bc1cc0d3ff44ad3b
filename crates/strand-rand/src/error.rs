// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur when reading from an entropy source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// System entropy source is unavailable or failed to generate random data.
    #[error("entropy source not available: {0}")]
    EntropyNotAvailable(getrandom::Error),

    /// The source produced fewer bytes than requested.
    #[error("entropy source short read: {filled} of {requested} bytes")]
    ShortRead {
        /// Bytes actually written to the destination.
        filled: usize,
        /// Bytes requested by the caller.
        requested: usize,
    },
}
