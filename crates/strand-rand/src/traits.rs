// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Trait for cryptographically secure random number generators.
///
/// Implementations must provide randomness suitable for security-sensitive
/// identifiers (tokens, passwords, keys). Typically backed by OS-level CSPRNGs.
///
/// A source is shared between callers and takes `&self`, so implementations
/// that hold state must synchronize it themselves.
pub trait EntropySource {
    /// Fills the destination buffer with cryptographically secure random bytes.
    ///
    /// Either every byte of `dest` is written and `Ok(())` is returned, or an
    /// error is returned and the contents of `dest` are unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the system entropy source
    /// is unavailable, or [`EntropyError::ShortRead`] if fewer bytes than
    /// requested were produced.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<E: EntropySource + ?Sized> EntropySource for &E {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}
