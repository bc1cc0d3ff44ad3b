// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cryptographically secure generation.

use strand_rand::{EntropySource, SystemEntropySource};
use tracing::{error, trace, warn};

use crate::context::Context;
use crate::error::{Result, StrandError};
use crate::validate::{ascii_to_string, validate, validate_text};

/// Secure charset generator over an injectable [`EntropySource`].
///
/// Each output character consumes exactly one random byte `b`, mapped to
/// `charset[b % charset.len()]`. Charsets longer than 256 entries therefore
/// only ever yield their first 256 entries.
///
/// # Example
///
/// ```rust
/// use strand::{SecureGenerator, SystemEntropySource, NUMBERS};
///
/// let generator = SecureGenerator::new(SystemEntropySource {});
/// let pin = generator.string(6, NUMBERS).expect("Failed to generate pin");
///
/// assert_eq!(pin.len(), 6);
/// assert!(pin.bytes().all(|b| b.is_ascii_digit()));
/// ```
#[derive(Debug, Default, Clone)]
pub struct SecureGenerator<E: EntropySource = SystemEntropySource> {
    entropy: E,
}

impl SecureGenerator<SystemEntropySource> {
    /// Generator backed by the OS CSPRNG.
    pub const fn system() -> Self {
        Self {
            entropy: SystemEntropySource {},
        }
    }
}

impl<E: EntropySource> SecureGenerator<E> {
    /// Creates a generator reading from `entropy`.
    pub fn new(entropy: E) -> Self {
        Self { entropy }
    }

    /// The entropy source this generator reads from.
    pub fn entropy(&self) -> &E {
        &self.entropy
    }

    /// Generates `size` bytes, each drawn from `charset`.
    ///
    /// # Errors
    ///
    /// - [`StrandError::InvalidSize`] if `size` is zero
    /// - [`StrandError::EmptyCharset`] if `charset` is empty
    /// - [`StrandError::RandomFailure`] if the entropy source fails (not retried)
    pub fn bytes(&self, size: usize, charset: impl AsRef<[u8]>) -> Result<Vec<u8>> {
        let charset = charset.as_ref();
        validate(size, charset)?;

        self.fill(size, charset)
    }

    /// Like [`SecureGenerator::bytes`], returning text.
    ///
    /// # Errors
    ///
    /// As [`SecureGenerator::bytes`], plus [`StrandError::NonAsciiCharset`].
    pub fn string(&self, size: usize, charset: &str) -> Result<String> {
        validate_text(size, charset)?;

        self.fill(size, charset.as_bytes()).map(ascii_to_string)
    }

    /// [`SecureGenerator::bytes`] preceded by a single check of `ctx`.
    ///
    /// A done context fails with [`StrandError::Canceled`] or
    /// [`StrandError::DeadlineExceeded`] without touching the entropy source.
    pub fn bytes_with_context(
        &self,
        ctx: &Context,
        size: usize,
        charset: impl AsRef<[u8]>,
    ) -> Result<Vec<u8>> {
        ctx.check()?;
        self.bytes(size, charset)
    }

    /// [`SecureGenerator::string`] preceded by a single check of `ctx`.
    pub fn string_with_context(&self, ctx: &Context, size: usize, charset: &str) -> Result<String> {
        ctx.check()?;
        self.string(size, charset)
    }

    /// Like [`SecureGenerator::bytes`] but panics on error.
    ///
    /// Only for call sites whose inputs are known to be valid.
    ///
    /// # Panics
    ///
    /// Panics with the [`StrandError`] itself as payload, recoverable through
    /// [`std::panic::catch_unwind`] and `downcast_ref::<StrandError>()`.
    pub fn must_bytes(&self, size: usize, charset: impl AsRef<[u8]>) -> Vec<u8> {
        self.bytes(size, charset).unwrap_or_else(|err| abort(err))
    }

    /// Like [`SecureGenerator::string`] but panics on error.
    ///
    /// # Panics
    ///
    /// See [`SecureGenerator::must_bytes`].
    pub fn must_string(&self, size: usize, charset: &str) -> String {
        self.string(size, charset).unwrap_or_else(|err| abort(err))
    }

    fn fill(&self, size: usize, charset: &[u8]) -> Result<Vec<u8>> {
        trace!(size, charset_len = charset.len(), "secure fill");

        let mut buf = vec![0u8; size];
        if let Err(err) = self.entropy.fill_bytes(&mut buf) {
            warn!(%err, size, "entropy source failed");
            return Err(StrandError::RandomFailure(err));
        }

        let charset_len = charset.len();
        for b in buf.iter_mut() {
            *b = charset[usize::from(*b) % charset_len];
        }

        Ok(buf)
    }
}

fn abort(err: StrandError) -> ! {
    error!(%err, "secure generation failed on a must_* call");
    std::panic::panic_any(err)
}

/// Generates `size` bytes from `charset` using the OS CSPRNG.
///
/// See [`SecureGenerator::bytes`].
pub fn bytes(size: usize, charset: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    SecureGenerator::system().bytes(size, charset)
}

/// Generates a string of `size` characters from `charset` using the OS CSPRNG.
///
/// See [`SecureGenerator::string`].
pub fn string(size: usize, charset: &str) -> Result<String> {
    SecureGenerator::system().string(size, charset)
}

/// [`bytes`] preceded by a single check of `ctx`.
pub fn bytes_with_context(
    ctx: &Context,
    size: usize,
    charset: impl AsRef<[u8]>,
) -> Result<Vec<u8>> {
    SecureGenerator::system().bytes_with_context(ctx, size, charset)
}

/// [`string`] preceded by a single check of `ctx`.
pub fn string_with_context(ctx: &Context, size: usize, charset: &str) -> Result<String> {
    SecureGenerator::system().string_with_context(ctx, size, charset)
}

/// [`bytes`] that panics with the [`StrandError`] as payload.
///
/// # Panics
///
/// On any error [`bytes`] would return.
pub fn must_bytes(size: usize, charset: impl AsRef<[u8]>) -> Vec<u8> {
    SecureGenerator::system().must_bytes(size, charset)
}

/// [`string`] that panics with the [`StrandError`] as payload.
///
/// # Panics
///
/// On any error [`string`] would return.
pub fn must_string(size: usize, charset: &str) -> String {
    SecureGenerator::system().must_string(size, charset)
}
