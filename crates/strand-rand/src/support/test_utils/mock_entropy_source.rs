// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Configurable behavior for [`MockEntropySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Normal operation (delegates to real entropy source).
    None,
    /// Simulates entropy source failure.
    FailAtFillBytes,
    /// Writes only the first `n` bytes, then reports a short read.
    ShortReadAt(usize),
    /// Fills with the sequence `start, start + 1, ...` (wrapping).
    Counter(u8),
}

/// Mock entropy source for testing.
///
/// Wraps [`SystemEntropySource`] but allows simulating failures via
/// [`MockEntropySourceBehaviour`]. Every call to `fill_bytes` is counted,
/// including failing ones.
pub struct MockEntropySource {
    inner: SystemEntropySource,
    behaviour: MockEntropySourceBehaviour,
    fill_calls: AtomicUsize,
}

impl MockEntropySource {
    /// Creates a new mock entropy source with the specified behavior.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            inner: SystemEntropySource {},
            behaviour,
            fill_calls: AtomicUsize::new(0),
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockEntropySourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Number of times `fill_bytes` has been called.
    pub fn fill_calls(&self) -> usize {
        self.fill_calls.load(Ordering::SeqCst)
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.fill_calls.fetch_add(1, Ordering::SeqCst);

        match self.behaviour {
            MockEntropySourceBehaviour::None => self.inner.fill_bytes(dest),
            MockEntropySourceBehaviour::FailAtFillBytes => Err(EntropyError::EntropyNotAvailable(
                getrandom::Error::UNSUPPORTED,
            )),
            MockEntropySourceBehaviour::ShortReadAt(n) => {
                if n >= dest.len() {
                    return self.inner.fill_bytes(dest);
                }

                self.inner.fill_bytes(&mut dest[..n])?;

                Err(EntropyError::ShortRead {
                    filled: n,
                    requested: dest.len(),
                })
            }
            MockEntropySourceBehaviour::Counter(start) => {
                let mut value = start;
                for byte in dest.iter_mut() {
                    *byte = value;
                    value = value.wrapping_add(1);
                }

                Ok(())
            }
        }
    }
}
