//! Keyed one-shot hash.
//!
//! # Length regimes
//! - **0..=16 bytes**: two overlapping 32-bit reads per accumulator (or a
//!   24-bit pack below 4 bytes), no loop.
//! - **17..=48 bytes**: 16-byte tail rounds only.
//! - **> 48 bytes**: 48-byte blocks feeding three independent lanes, folded
//!   together, then the 16-byte tail rounds.
//!
//! The final 16 bytes are always re-read for the last two words, overlapping
//! whatever the tail rounds already consumed.

use crate::mum::{mix, mum, read3, read4, read8};
use crate::types::Secret;

/// Bytes consumed per iteration of the three-lane loop.
const BLOCK_SIZE: usize = 48;

/// Bytes consumed per tail round.
const TAIL_SIZE: usize = 16;

/// Hash `key` under `seed` and `secret`.
///
/// Deterministic and total over every input length.
///
/// # Example
/// ```rust
/// use wyhash::{wyhash, Secret};
///
/// assert_eq!(wyhash(b"", 0, &Secret::default()), 10_602_188_539_874_428_322);
/// ```
#[must_use]
pub fn wyhash(key: &[u8], seed: u64, secret: &Secret) -> u64 {
    let len = key.len();
    let mut seed = seed ^ mix(seed ^ secret[0], secret[1]);

    let (mut a, mut b) = if len <= TAIL_SIZE {
        if len >= 4 {
            // 4..=16: reads at 0 and len-4, plus an inner pair that collapses
            // onto the outer pair when len < 8
            let mid = (len >> 3) << 2;
            (
                (read4(key, 0) << 32) | read4(key, mid),
                (read4(key, len - 4) << 32) | read4(key, len - 4 - mid),
            )
        } else if len > 0 {
            (read3(key, len), 0)
        } else {
            (0, 0)
        }
    } else {
        let mut p = 0;
        let mut remaining = len;

        if remaining >= BLOCK_SIZE {
            let mut see1 = seed;
            let mut see2 = seed;
            while remaining >= BLOCK_SIZE {
                seed = mix(read8(key, p) ^ secret[1], read8(key, p + 8) ^ seed);
                see1 = mix(read8(key, p + 16) ^ secret[2], read8(key, p + 24) ^ see1);
                see2 = mix(read8(key, p + 32) ^ secret[3], read8(key, p + 40) ^ see2);
                p += BLOCK_SIZE;
                remaining -= BLOCK_SIZE;
            }
            seed ^= see1 ^ see2;
        }

        while remaining > TAIL_SIZE {
            seed = mix(read8(key, p) ^ secret[1], read8(key, p + 8) ^ seed);
            p += TAIL_SIZE;
            remaining -= TAIL_SIZE;
        }

        // p + remaining == len, so these are the last 16 bytes of the key
        (read8(key, len - 16), read8(key, len - 8))
    };

    a ^= secret[1];
    b ^= seed;
    (a, b) = mum(a, b);
    mix(a ^ secret[0] ^ len as u64, b ^ secret[1])
}

#[cfg(test)]
#[allow(clippy::cast_possible_truncation)]
mod tests {
    use super::*;

    fn h(s: &str) -> u64 {
        wyhash(s.as_bytes(), 0, &Secret::default())
    }

    #[test]
    fn test_golden_vectors() {
        assert_eq!(h(""), 10_602_188_539_874_428_322);
        assert_eq!(h("a"), 12_460_635_889_546_412_024);
        assert_eq!(h("fjsakfdsjkf"), 2_666_383_502_234_035_417);
        assert_eq!(h("\r*@#*(&$kj Sas da \n"), 10_958_792_633_692_157_407);
    }

    #[test]
    fn test_seed_changes_output() {
        let secret = Secret::default();
        assert_ne!(wyhash(b"abc", 0, &secret), wyhash(b"abc", 1, &secret));
    }

    #[test]
    fn test_secret_changes_output() {
        let other = Secret::new([1, 3, 5, 7]);
        assert_ne!(
            wyhash(b"abc", 0, &Secret::default()),
            wyhash(b"abc", 0, &other)
        );
    }

    #[test]
    fn test_every_length_up_to_three_blocks() {
        let data: [u8; 3 * BLOCK_SIZE + 1] = core::array::from_fn(|i| i as u8);
        let secret = Secret::default();
        for len in 0..=data.len() {
            let first = wyhash(&data[..len], 0, &secret);
            assert_eq!(first, wyhash(&data[..len], 0, &secret), "len {len}");
        }
    }
}
