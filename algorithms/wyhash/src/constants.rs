//! wyhash Constants
//!
//! The default secret is itself a valid output of the secret generator: four
//! odd 64-bit primes whose pairwise XOR has a population count of exactly 32.
//! The PRNG reuses its first two words as increment and whitening key.

// =============================================================================
// DEFAULT SECRET
// =============================================================================

/// Default secret parameters used when no custom secret is supplied.
pub const WYP: [u64; 4] = [
    0x2d35_8dcc_aa6c_78a5,
    0x8bb8_4b93_962e_acc9,
    0x4b33_a62e_d433_d4a3,
    0x4d5a_2da5_1de1_aa47,
];

// =============================================================================
// PRNG CONSTANTS
// =============================================================================

/// Weyl increment added to the `wyrand` state on every draw.
pub const RAND_INCREMENT: u64 = WYP[0];

/// Whitening constant XORed into the second `wyrand` mix operand.
pub const RAND_XOR: u64 = WYP[1];

/// Scale of `2^-52`, mapping the top 52 bits of a draw onto `[0, 1)`.
pub const UNIFORM_NORM: f64 = 1.0 / 4_503_599_627_370_496.0;

/// Scale of `2^-20` for the sum of three 21-bit slices.
pub const GAUSSIAN_NORM: f64 = 1.0 / 1_048_576.0;

// =============================================================================
// SECRET GENERATION
// =============================================================================

/// Candidate bytes for secret construction: every byte with exactly four bits
/// set, so each 64-bit candidate has a population count of 32.
#[rustfmt::skip]
pub const SECRET_ALPHABET: [u8; 70] = [
    15, 23, 27, 29, 30, 39, 43, 45, 46, 51, 53, 54, 57, 58, 60, 71, 75, 77, 78,
    83, 85, 86, 89, 90, 92, 99, 101, 102, 105, 106, 108, 113, 114, 116, 120,
    135, 139, 141, 142, 147, 149, 150, 153, 154, 156, 163, 165, 166, 169, 170,
    172, 177, 178, 180, 184, 195, 197, 198, 201, 202, 204, 209, 210, 212, 216,
    225, 226, 228, 232, 240,
];

/// Required population count of `a ^ b` for any two secret words.
pub const SECRET_PAIR_DISTANCE: u32 = 32;

/// Witness bases for the deterministic strong-probable-prime test.
/// Together they admit no pseudoprime below `2^64`.
pub const SPRP_BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Smallest strong pseudoprime to base 2; anything below it that passes
/// base 2 is prime.
pub const SPRP_BASE2_BOUND: u64 = 2047;
