//! Secret Generator
//!
//! Derives custom keying material from a seed. Candidates are assembled from
//! [`SECRET_ALPHABET`] bytes drawn with `wyrand`, then filtered until four
//! words are found that are odd, prime, and pairwise 32 bits apart.
//!
//! The search has no iteration cap. With the fixed alphabet the early slots
//! fill within a few hundred draws and the last one within tens of thousands,
//! since it must sit 32 bits away from three words at once. Only a malformed
//! alphabet could make it spin forever.

use tracing::{debug, trace};

use crate::constants::{SECRET_ALPHABET, SECRET_PAIR_DISTANCE, SPRP_BASE2_BOUND, SPRP_BASES};
use crate::rng::wyrand;
use crate::types::Secret;

// =============================================================================
// MODULAR ARITHMETIC
// =============================================================================

/// `(x + y) mod m` for `x, y < m`, exact even when the sum carries out.
#[inline]
const fn add_mod(x: u64, y: u64, m: u64) -> u64 {
    let (sum, carry) = x.overflowing_add(y);
    if carry || sum >= m {
        sum.wrapping_sub(m)
    } else {
        sum
    }
}

/// `(a * b) mod m` by double-and-add, never needing a wider type.
const fn mul_mod(mut a: u64, mut b: u64, m: u64) -> u64 {
    let mut r = 0;
    a %= m;
    while b != 0 {
        if b & 1 == 1 {
            r = add_mod(r, a, m);
        }
        b >>= 1;
        if b != 0 {
            a = add_mod(a, a, m);
        }
    }
    r
}

/// `(a ^ e) mod m` by square-and-multiply.
const fn pow_mod(mut a: u64, mut e: u64, m: u64) -> u64 {
    let mut r = 1 % m;
    a %= m;
    while e != 0 {
        if e & 1 == 1 {
            r = mul_mod(r, a, m);
        }
        e >>= 1;
        if e != 0 {
            a = mul_mod(a, a, m);
        }
    }
    r
}

// =============================================================================
// PRIMALITY
// =============================================================================

/// Strong probable prime test of odd `n > 3` to base `a`.
fn sprp(n: u64, a: u64) -> bool {
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;

    let mut b = pow_mod(a, d, n);
    if b == 1 || b == n - 1 {
        return true;
    }
    for _ in 1..s {
        b = mul_mod(b, b, n);
        if b <= 1 {
            return false;
        }
        if b == n - 1 {
            return true;
        }
    }
    false
}

/// Deterministic primality test, exact for every `u64`.
///
/// Miller-Rabin over the first twelve primes as witnesses, which admits no
/// strong pseudoprime below `2^64`.
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n < 4 {
        return n >= 2;
    }
    if n & 1 == 0 {
        return false;
    }
    if !sprp(n, SPRP_BASES[0]) {
        return false;
    }
    if n < SPRP_BASE2_BOUND {
        return true;
    }
    SPRP_BASES[1..].iter().all(|&a| sprp(n, a))
}

// =============================================================================
// GENERATION
// =============================================================================

/// Draw one alphabet byte, widened to 64 bits.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn draw_byte(state: &mut u64) -> u64 {
    let idx = wyrand(state) % SECRET_ALPHABET.len() as u64;
    u64::from(SECRET_ALPHABET[idx as usize])
}

/// Generate a custom secret from `seed`.
///
/// Deterministic: the same seed always yields the same secret, and the result
/// always satisfies [`Secret::is_valid`].
///
/// # Example
/// ```rust
/// let secret = wyhash::make_secret(42);
/// assert!(secret.is_valid());
/// assert_eq!(secret, wyhash::make_secret(42));
/// ```
#[must_use]
pub fn make_secret(seed: u64) -> Secret {
    let mut state = seed;
    let mut words = [0u64; 4];

    for slot in 0..words.len() {
        let mut draws = 0u64;
        let word = loop {
            draws += 1;
            let candidate = (0..64)
                .step_by(8)
                .fold(0u64, |acc, shift| acc | (draw_byte(&mut state) << shift));

            if candidate & 1 == 0 {
                trace!(slot, candidate, reason = "even", "rejected secret candidate");
                continue;
            }
            if let Some(prior) = words[..slot]
                .iter()
                .position(|&w| (w ^ candidate).count_ones() != SECRET_PAIR_DISTANCE)
            {
                trace!(slot, candidate, prior, reason = "distance", "rejected secret candidate");
                continue;
            }
            if !is_prime(candidate) {
                trace!(slot, candidate, reason = "composite", "rejected secret candidate");
                continue;
            }
            break candidate;
        };
        debug!(slot, word, draws, "accepted secret word");
        words[slot] = word;
    }

    Secret::new(words)
}
