//! PRNG Core
//!
//! Stateful generators (`wyrand`, `wytrand`), a stateless two-input mixer
//! (`wyhash64`), and mappers from any 64-bit draw onto `[0, 1)`, an
//! approximate normal distribution, or `[0, k)`.
//!
//! The mappers accept output from any of the generators or from `wyhash`
//! itself. [`WyRng`] implements them once for every generator.

use core::num::NonZeroU64;

use crate::constants::{GAUSSIAN_NORM, RAND_INCREMENT, RAND_XOR, UNIFORM_NORM, WYP};
use crate::mum::{mix, mum};
use crate::types::RangeError;

// =============================================================================
// GENERATORS
// =============================================================================

/// Advance `state` by one Weyl step and return the mixed output.
///
/// Passes `BigCrush` and `PractRand`. The caller owns `state`; sharing one
/// cell between threads needs external locking.
#[inline]
pub fn wyrand(state: &mut u64) -> u64 {
    *state = state.wrapping_add(RAND_INCREMENT);
    mix(*state, *state ^ RAND_XOR)
}

/// Stateless 64-bit x 64-bit -> 64-bit mixer.
///
/// Suitable for deterministic, counter-based random numbers.
#[inline]
#[must_use]
pub const fn wyhash64(a: u64, b: u64) -> u64 {
    let (a, b) = mum(a ^ RAND_INCREMENT, b ^ RAND_XOR);
    mix(a ^ RAND_INCREMENT, b ^ RAND_XOR)
}

/// Time-seeded generator: folds the wall clock into `state` on every call.
///
/// Best-effort entropy only. Output is not reproducible and not suitable for
/// anything security-sensitive.
#[cfg(feature = "std")]
pub fn wytrand(state: &mut u64) -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    // Clock before the epoch contributes zero rather than failing
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis());
    #[allow(clippy::cast_possible_truncation)]
    let teed = (millis as u64).wrapping_mul(1000);

    let teed = mix(teed ^ WYP[0], *state ^ WYP[1]);
    *state = mix(teed ^ WYP[0], WYP[2]);
    mix(*state, *state ^ WYP[3])
}

// =============================================================================
// DISTRIBUTION MAPPERS
// =============================================================================

/// Map a 64-bit draw onto `[0, 1)` using its top 52 bits.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn wy2u01(r: u64) -> f64 {
    (r >> 12) as f64 * UNIFORM_NORM
}

/// Map a 64-bit draw onto an approximate standard normal distribution.
///
/// Sums three 21-bit uniform slices (central limit approximation), giving
/// mean 0, variance 1, and support strictly inside `(-3, 3)`. Not an exact
/// Gaussian sampler; the tails are truncated.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::suboptimal_flops)]
pub fn wy2gau(r: u64) -> f64 {
    const SLICE: u64 = 0x1f_ffff;
    let sum = (r & SLICE) + ((r >> 21) & SLICE) + ((r >> 42) & SLICE);
    sum as f64 * GAUSSIAN_NORM - 3.0
}

/// Map a 64-bit draw onto `[0, k)` via the high half of `r * k`.
///
/// Lemire's multiply-shift reduction: far less biased than `r % k`.
#[inline]
#[must_use]
pub const fn wy2u0k(r: u64, k: NonZeroU64) -> u64 {
    mum(r, k.get()).1
}

// =============================================================================
// GENERATOR TRAIT
// =============================================================================

/// A source of 64-bit random values with derived distributions.
///
/// Implementors only provide [`WyRng::next_u64`].
pub trait WyRng {
    /// Produce the next 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Uniform `f64` in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        wy2u01(self.next_u64())
    }

    /// Approximately normal `f64`; see [`wy2gau`].
    fn next_gaussian(&mut self) -> f64 {
        wy2gau(self.next_u64())
    }

    /// Integer in `[0, bound)`.
    ///
    /// # Errors
    /// Returns `RangeError` if `bound` is zero.
    fn next_below(&mut self, bound: u64) -> Result<u64, RangeError> {
        let k = NonZeroU64::new(bound).ok_or_else(|| RangeError::new(0, bound))?;
        Ok(wy2u0k(self.next_u64(), k))
    }

    /// Integer in the half-open range `[low, high)`.
    ///
    /// # Errors
    /// Returns `RangeError` if `high <= low`.
    fn next_between(&mut self, low: u64, high: u64) -> Result<u64, RangeError> {
        let span = high
            .checked_sub(low)
            .and_then(NonZeroU64::new)
            .ok_or_else(|| RangeError::new(low, high))?;
        Ok(low + wy2u0k(self.next_u64(), span))
    }
}

/// Deterministic `wyrand` stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wyrand {
    state: u64,
}

impl Wyrand {
    /// Start a stream from `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Current state; `Wyrand::new(rng.state())` resumes the stream.
    #[must_use]
    pub const fn state(&self) -> u64 {
        self.state
    }
}

impl WyRng for Wyrand {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        wyrand(&mut self.state)
    }
}

/// Time-seeded `wytrand` stream. Never reproducible.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct Wytrand {
    state: u64,
}

#[cfg(feature = "std")]
impl Wytrand {
    /// Start a stream from `seed`; the clock is mixed in on every draw.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

#[cfg(feature = "std")]
impl WyRng for Wytrand {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        wytrand(&mut self.state)
    }
}

// =============================================================================
// RAND_CORE INTEGRATION
// =============================================================================

#[cfg(feature = "rand_core")]
impl rand_core::RngCore for Wyrand {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        WyRng::next_u64(self) as u32
    }

    fn next_u64(&mut self) -> u64 {
        WyRng::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(feature = "rand_core")]
impl rand_core::SeedableRng for Wyrand {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
