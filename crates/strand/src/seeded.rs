// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Deterministic, seeded generation.
//!
//! **Not cryptographically secure.** Use the secure path for secrets.
//!
//! Every call builds its own `ChaCha8Rng` from the resolved seed; no stream is
//! ever shared between calls, so output depends only on `(size, charset, seed)`
//! and never on call ordering or concurrency.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::context::Context;
use crate::error::Result;
use crate::validate::{ascii_to_string, validate, validate_text};

/// Resolves an optional seed.
///
/// `None` becomes the current wall-clock time in nanoseconds since the Unix
/// epoch (truncated to 64 bits), so unseeded calls are deliberately not
/// reproducible.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(seed) => seed,
        None => {
            let seed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64;
            debug!(seed, "derived seed from wall clock");

            seed
        }
    }
}

/// Seeded charset generator.
///
/// Holds only the optional seed. With a fixed seed, every call on the same
/// generator returns the same output for the same `(size, charset)`.
///
/// Applies the same validation as the secure path: zero size and empty
/// charsets are rejected rather than producing empty or placeholder output.
///
/// # Example
///
/// ```rust
/// use strand::{SeededGenerator, LOWERCASE_ALPHABET};
///
/// let generator = SeededGenerator::new(Some(7));
/// let first = generator.string(12, LOWERCASE_ALPHABET).expect("valid input");
/// let second = generator.string(12, LOWERCASE_ALPHABET).expect("valid input");
///
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeededGenerator {
    seed: Option<u64>,
}

impl SeededGenerator {
    /// Creates a generator. `None` derives a fresh seed from the clock on
    /// every call.
    pub const fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    /// The configured seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generates `size` bytes, each drawn uniformly from `charset`.
    ///
    /// # Errors
    ///
    /// - [`StrandError::InvalidSize`](crate::StrandError::InvalidSize) if `size` is zero
    /// - [`StrandError::EmptyCharset`](crate::StrandError::EmptyCharset) if `charset` is empty
    pub fn bytes(&self, size: usize, charset: impl AsRef<[u8]>) -> Result<Vec<u8>> {
        let charset = charset.as_ref();
        validate(size, charset)?;

        Ok(self.fill(size, charset))
    }

    /// Like [`SeededGenerator::bytes`], returning text.
    ///
    /// # Errors
    ///
    /// As [`SeededGenerator::bytes`], plus
    /// [`StrandError::NonAsciiCharset`](crate::StrandError::NonAsciiCharset).
    pub fn string(&self, size: usize, charset: &str) -> Result<String> {
        validate_text(size, charset)?;

        Ok(ascii_to_string(self.fill(size, charset.as_bytes())))
    }

    /// [`SeededGenerator::bytes`] preceded by a single check of `ctx`.
    pub fn bytes_with_context(
        &self,
        ctx: &Context,
        size: usize,
        charset: impl AsRef<[u8]>,
    ) -> Result<Vec<u8>> {
        ctx.check()?;
        self.bytes(size, charset)
    }

    /// [`SeededGenerator::string`] preceded by a single check of `ctx`.
    pub fn string_with_context(&self, ctx: &Context, size: usize, charset: &str) -> Result<String> {
        ctx.check()?;
        self.string(size, charset)
    }

    fn fill(&self, size: usize, charset: &[u8]) -> Vec<u8> {
        let seed = resolve_seed(self.seed);
        trace!(size, charset_len = charset.len(), "seeded fill");

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let charset_len = charset.len();

        (0..size)
            .map(|_| charset[rng.random_range(0..charset_len)])
            .collect()
    }
}

/// Generates `size` bytes from `charset`, deterministically for a given seed.
///
/// See [`SeededGenerator::bytes`].
pub fn seeded_bytes(size: usize, charset: impl AsRef<[u8]>, seed: Option<u64>) -> Result<Vec<u8>> {
    SeededGenerator::new(seed).bytes(size, charset)
}

/// Generates a string of `size` characters from `charset`, deterministically
/// for a given seed.
///
/// See [`SeededGenerator::string`].
pub fn seeded_string(size: usize, charset: &str, seed: Option<u64>) -> Result<String> {
    SeededGenerator::new(seed).string(size, charset)
}

/// [`seeded_bytes`] preceded by a single check of `ctx`.
pub fn seeded_bytes_with_context(
    ctx: &Context,
    size: usize,
    charset: impl AsRef<[u8]>,
    seed: Option<u64>,
) -> Result<Vec<u8>> {
    SeededGenerator::new(seed).bytes_with_context(ctx, size, charset)
}

/// [`seeded_string`] preceded by a single check of `ctx`.
pub fn seeded_string_with_context(
    ctx: &Context,
    size: usize,
    charset: &str,
    seed: Option<u64>,
) -> Result<String> {
    SeededGenerator::new(seed).string_with_context(ctx, size, charset)
}
