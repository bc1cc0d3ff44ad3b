// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::{Result, StrandError};

/// Checks the inputs shared by every generator, before any randomness is drawn.
#[inline]
pub(crate) fn validate(size: usize, charset: &[u8]) -> Result<()> {
    if size == 0 {
        return Err(StrandError::InvalidSize);
    }

    if charset.is_empty() {
        return Err(StrandError::EmptyCharset);
    }

    Ok(())
}

/// [`validate`] plus the ASCII requirement of the text variants.
///
/// An ASCII charset guarantees that any selection of its bytes is valid UTF-8.
#[inline]
pub(crate) fn validate_text(size: usize, charset: &str) -> Result<()> {
    validate(size, charset.as_bytes())?;

    if !charset.is_ascii() {
        return Err(StrandError::NonAsciiCharset);
    }

    Ok(())
}

/// Converts generator output over an ASCII charset into a `String`.
#[inline]
pub(crate) fn ascii_to_string(bytes: Vec<u8>) -> String {
    debug_assert!(bytes.is_ascii());
    bytes.into_iter().map(char::from).collect()
}
