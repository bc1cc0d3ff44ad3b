// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use strand_rand::EntropyError;
use thiserror::Error;

/// Errors returned by the generators.
///
/// On error no partial output is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrandError {
    /// The requested size is zero.
    #[error("invalid size: must be greater than 0")]
    InvalidSize,

    /// The charset has no characters.
    #[error("invalid charset: cannot be empty")]
    EmptyCharset,

    /// A text variant was given a charset containing non-ASCII bytes.
    #[error("invalid charset: text output requires an ASCII charset")]
    NonAsciiCharset,

    /// The entropy source failed to produce the requested bytes.
    #[error("failed to generate random bytes: {0}")]
    RandomFailure(#[from] EntropyError),

    /// The context was canceled before generation started.
    #[error("context canceled")]
    Canceled,

    /// The context deadline had elapsed before generation started.
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

impl StrandError {
    /// Returns `true` for [`StrandError::Canceled`] and [`StrandError::DeadlineExceeded`].
    pub fn is_context_error(&self) -> bool {
        matches!(self, Self::Canceled | Self::DeadlineExceeded)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, StrandError>;
