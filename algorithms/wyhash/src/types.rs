//! Shared types used across the wyhash library.

use core::fmt;
use core::ops::Index;
#[cfg(feature = "std")]
use std::error;

use crate::constants::{SECRET_PAIR_DISTANCE, WYP};

// =============================================================================
// SECRET
// =============================================================================

/// Four 64-bit keying words for the hash and PRNG family.
///
/// Secrets produced by [`crate::make_secret`] (and the default, [`WYP`]) hold
/// these invariants: every word is an odd prime, and every pair of words
/// differs in exactly 32 bit positions. [`Secret::from`] accepts arbitrary
/// words; use [`Secret::is_valid`] to check them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secret([u64; 4]);

impl Secret {
    /// Wrap four words without validation.
    #[must_use]
    pub const fn new(words: [u64; 4]) -> Self {
        Self(words)
    }

    /// The default secret, [`WYP`].
    #[must_use]
    pub const fn wyp() -> Self {
        Self(WYP)
    }

    /// Borrow the raw words.
    #[must_use]
    pub const fn as_array(&self) -> &[u64; 4] {
        &self.0
    }

    /// Check every secret invariant: odd, prime, pairwise distance of 32.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &w)| {
            w & 1 == 1
                && crate::is_prime(w)
                && self.0[..i]
                    .iter()
                    .all(|&prior| (prior ^ w).count_ones() == SECRET_PAIR_DISTANCE)
        })
    }
}

impl Default for Secret {
    fn default() -> Self {
        Self::wyp()
    }
}

impl From<[u64; 4]> for Secret {
    fn from(words: [u64; 4]) -> Self {
        Self(words)
    }
}

impl From<Secret> for [u64; 4] {
    fn from(secret: Secret) -> Self {
        secret.0
    }
}

impl Index<usize> for Secret {
    type Output = u64;

    #[inline]
    fn index(&self, i: usize) -> &u64 {
        &self.0[i]
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:016x} {:016x} {:016x} {:016x}",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error for a bounded draw over an empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeError {
    low: u64,
    high: u64,
}

impl RangeError {
    /// Create a new `RangeError` for the half-open range `[low, high)`.
    pub const fn new(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    /// Inclusive lower bound that was requested.
    pub const fn low(&self) -> u64 {
        self.low
    }

    /// Exclusive upper bound that was requested.
    pub const fn high(&self) -> u64 {
        self.high
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "empty range [{}, {}): the upper bound must exceed the lower bound",
            self.low, self.high
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for RangeError {}
