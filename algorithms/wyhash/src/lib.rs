#![cfg_attr(not(feature = "std"), no_std)]

//! # wyhash
//!
//! Fast keyed 64-bit hashing and pseudo-random number generation built on a
//! single multiply-mix primitive.
//!
//! **Not cryptographic.** Nothing in this crate resists a motivated
//! attacker: do not use it for MACs, password storage or key derivation.

//! # Usage
//! ```rust
//! use wyhash::{Secret, WyRng, Wyhash, Wyrand};
//!
//! // 1. One-shot hashing with the default secret
//! let h = wyhash::wyhash(b"a", 0, &Secret::default());
//! assert_eq!(h, 12_460_635_889_546_412_024);
//!
//! // 2. Keyed hashing with a generated secret
//! let hasher = Wyhash::with_secret(7, Wyhash::make_secret(42));
//! let digest = hasher.hash("Performance Matters");
//! assert_eq!(digest, hasher.hash(b"Performance Matters"));
//!
//! // 3. Deterministic random numbers
//! let mut rng = Wyrand::new(0);
//! let roll = rng.next_between(1, 7)?;
//! assert!((1..7).contains(&roll));
//! # Ok::<(), wyhash::RangeError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

extern crate alloc;

pub mod constants;
mod hash;
mod hasher;
mod mum;
mod rng;
mod secret;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use hash::wyhash;
pub use hasher::{WyHasher, Wyhash};
pub use mum::{mix, mum, read3, read4, read8};
#[cfg(feature = "std")]
pub use rng::{wytrand, Wytrand};
pub use rng::{wy2gau, wy2u01, wy2u0k, wyhash64, wyrand, WyRng, Wyrand};
pub use secret::{is_prime, make_secret};
pub use types::{RangeError, Secret};
