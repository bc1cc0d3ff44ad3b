// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Predefined charsets.
//!
//! Composite sets are built from the smaller ones with `concat!`, so the
//! composition order is fixed at compile time.

macro_rules! uppercase {
    () => {
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
    };
}

macro_rules! lowercase {
    () => {
        "abcdefghijklmnopqrstuvwxyz"
    };
}

macro_rules! numbers {
    () => {
        "0123456789"
    };
}

macro_rules! symbols {
    () => {
        "<>,\\./|?;:[]{}+=_-()*&^%$#@!~"
    };
}

/// Uppercase English letters (`A-Z`).
pub const UPPERCASE_ALPHABET: &str = uppercase!();

/// Lowercase English letters (`a-z`).
pub const LOWERCASE_ALPHABET: &str = lowercase!();

/// [`LOWERCASE_ALPHABET`] followed by [`UPPERCASE_ALPHABET`].
pub const ALPHABET: &str = concat!(lowercase!(), uppercase!());

/// Decimal digits (`0-9`).
pub const NUMBERS: &str = numbers!();

/// [`ALPHABET`] followed by [`NUMBERS`].
pub const ALPHA_NUMERIC: &str = concat!(lowercase!(), uppercase!(), numbers!());

/// Common special characters for password and token generation.
pub const SYMBOLS: &str = symbols!();

/// [`ALPHA_NUMERIC`] followed by [`SYMBOLS`].
pub const ALL: &str = concat!(lowercase!(), uppercase!(), numbers!(), symbols!());
