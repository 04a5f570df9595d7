//! Keyed Hasher
//!
//! [`Wyhash`] binds a seed and secret once and hashes many inputs with them.
//! It doubles as a [`BuildHasher`], producing [`WyHasher`] instances for
//! `HashMap` and friends.

use alloc::vec::Vec;
use core::hash::{BuildHasher, Hasher};

use crate::hash::wyhash;
use crate::secret::make_secret;
use crate::types::Secret;

// =============================================================================
// KEYED HASHER
// =============================================================================

/// A seed and secret bound together for repeated hashing.
///
/// # Example
/// ```rust
/// use wyhash::Wyhash;
///
/// let hasher = Wyhash::new(0);
/// assert_eq!(hasher.hash("a"), 12_460_635_889_546_412_024);
/// assert_eq!(hasher.hash("a"), hasher.hash(b"a"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Wyhash {
    seed: u64,
    secret: Secret,
}

impl Wyhash {
    /// Hasher with `seed` and the default secret.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            secret: Secret::wyp(),
        }
    }

    /// Hasher with `seed` and a custom `secret`.
    #[must_use]
    pub const fn with_secret(seed: u64, secret: Secret) -> Self {
        Self { seed, secret }
    }

    /// Generate a custom secret; see [`make_secret`].
    #[must_use]
    pub fn make_secret(seed: u64) -> Secret {
        make_secret(seed)
    }

    /// Hash bytes or UTF-8 text.
    #[inline]
    #[must_use]
    pub fn hash(&self, data: impl AsRef<[u8]>) -> u64 {
        wyhash(data.as_ref(), self.seed, &self.secret)
    }

    /// The bound seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The bound secret.
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }
}

impl BuildHasher for Wyhash {
    type Hasher = WyHasher;

    fn build_hasher(&self) -> WyHasher {
        WyHasher::with_secret(self.seed, self.secret)
    }
}

// =============================================================================
// STREAMING ADAPTER
// =============================================================================

/// [`Hasher`] adapter over the one-shot hash.
///
/// Writes are buffered; [`Hasher::finish`] hashes everything written so far,
/// so the result equals `wyhash(concatenated writes, seed, secret)`.
#[derive(Debug, Clone, Default)]
pub struct WyHasher {
    buffer: Vec<u8>,
    seed: u64,
    secret: Secret,
}

impl WyHasher {
    /// Adapter with `seed` and the default secret.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self::with_secret(seed, Secret::wyp())
    }

    /// Adapter with `seed` and a custom `secret`.
    #[must_use]
    pub const fn with_secret(seed: u64, secret: Secret) -> Self {
        Self {
            buffer: Vec::new(),
            seed,
            secret,
        }
    }

    /// Discard buffered input, keeping seed and secret.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }
}

impl Hasher for WyHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        wyhash(&self.buffer, self.seed, &self.secret)
    }
}
