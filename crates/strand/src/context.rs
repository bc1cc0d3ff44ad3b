// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cooperative cancellation for the `_with_context` generators.

use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{Result, StrandError};

/// Cancellation token with an optional deadline.
///
/// A `Context` is observed, never owned, by a generation call: the call checks
/// it exactly once before doing any work. Generation itself is a single short
/// buffer fill and is not interrupted once started.
///
/// Clones share the same token, so canceling any clone cancels all of them.
/// [`Context::child`] derives a context that is canceled together with its
/// parent but can also be canceled on its own.
///
/// # Example
///
/// ```rust
/// use strand::{Context, StrandError, NUMBERS};
///
/// let ctx = Context::new();
/// ctx.cancel();
///
/// let result = strand::bytes_with_context(&ctx, 6, NUMBERS);
/// assert_eq!(result, Err(StrandError::Canceled));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// Creates a cancellable context without a deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias of [`Context::new`].
    #[doc(alias = "new")]
    pub fn background() -> Self {
        Self::new()
    }

    /// Creates a context that expires at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    /// Creates a context that expires `timeout` from now.
    ///
    /// A timeout too large to represent as an [`Instant`] yields no deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Instant::now().checked_add(timeout),
        }
    }

    /// Derives a child context with the same deadline.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Derives a child context expiring at `deadline` or at the parent's
    /// deadline, whichever comes first.
    pub fn child_with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(parent) => parent.min(deadline),
            None => deadline,
        };

        Self {
            token: self.token.child_token(),
            deadline: Some(deadline),
        }
    }

    /// Derives a child context expiring `timeout` from now, capped by the
    /// parent's deadline.
    pub fn child_with_timeout(&self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.child_with_deadline(deadline),
            None => self.child(),
        }
    }

    /// Cancels this context and every child derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns `true` once [`Context::cancel`] was called on this context or
    /// on an ancestor.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// The deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// The underlying cancellation token.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Reports why the context is done, or `None` if it is still live.
    ///
    /// Explicit cancellation is reported in preference to an elapsed deadline.
    pub fn err(&self) -> Option<StrandError> {
        if self.token.is_cancelled() {
            return Some(StrandError::Canceled);
        }

        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(StrandError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Non-blocking check performed at the entry of every `_with_context` call.
    pub fn check(&self) -> Result<()> {
        match self.err() {
            Some(err) => {
                debug!(%err, "context done before generation started");
                Err(err)
            }
            None => Ok(()),
        }
    }
}

impl From<CancellationToken> for Context {
    fn from(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }
}
