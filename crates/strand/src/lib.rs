// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # strand
//!
//! Random byte sequences and strings whose characters are drawn from a
//! caller-supplied charset.
//!
//! Two generation paths are offered:
//!
//! - **Secure** ([`bytes`], [`string`], [`SecureGenerator`]): backed by an
//!   [`EntropySource`] (the OS CSPRNG by default). Suitable for tokens,
//!   passwords and keys.
//! - **Seeded** ([`seeded_bytes`], [`seeded_string`], [`SeededGenerator`]):
//!   backed by a ChaCha8 stream built fresh from a 64-bit seed on every call.
//!   Identical `(size, charset, seed)` always yields identical output.
//!   **Not** suitable for secrets.
//!
//! Every operation has a `_with_context` form that checks a [`Context`] once
//! before doing any work, and the secure path has `must_*` forms that panic
//! with the original [`StrandError`] as payload.
//!
//! ## Example
//!
//! ```rust
//! use strand::{ALPHA_NUMERIC, UPPERCASE_ALPHABET};
//!
//! let token = strand::string(32, ALPHA_NUMERIC).expect("Failed to generate token");
//! assert_eq!(token.len(), 32);
//!
//! let a = strand::seeded_string(10, UPPERCASE_ALPHABET, Some(42)).expect("valid input");
//! let b = strand::seeded_string(10, UPPERCASE_ALPHABET, Some(42)).expect("valid input");
//! assert_eq!(a, b);
//! ```
//!
//! ## Bias
//!
//! The secure path maps one random byte to one output character with
//! `charset[byte % charset.len()]`. When the charset length does not divide
//! 256 the low indices are slightly favoured. The seeded path draws indices with
//! an unbiased range sampler.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod charset;
mod context;
mod error;
mod secure;
mod seeded;
mod validate;

pub use charset::{
    ALL, ALPHA_NUMERIC, ALPHABET, LOWERCASE_ALPHABET, NUMBERS, SYMBOLS, UPPERCASE_ALPHABET,
};
pub use context::Context;
pub use error::{Result, StrandError};
pub use secure::{
    SecureGenerator, bytes, bytes_with_context, must_bytes, must_string, string,
    string_with_context,
};
pub use seeded::{
    SeededGenerator, resolve_seed, seeded_bytes, seeded_bytes_with_context, seeded_string,
    seeded_string_with_context,
};

pub use strand_rand::{EntropyError, EntropySource, SystemEntropySource};

#[cfg(any(test, feature = "test-utils"))]
pub use strand_rand::test_utils;
