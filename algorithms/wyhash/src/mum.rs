//! Multiply-mix primitive and little-endian byte-window readers.
//!
//! Every other component of the crate reduces to [`mum`] and [`mix`].

// =============================================================================
// MULTIPLY-MIX
// =============================================================================

/// Full 64x64 -> 128-bit multiply, returned as `(low, high)` halves.
///
/// This is the default ("protection level 1") behavior: the halves replace
/// the operands outright.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn mum(a: u64, b: u64) -> (u64, u64) {
    let r = (a as u128) * (b as u128);
    (r as u64, (r >> 64) as u64)
}

/// Multiply, then fold the 128-bit product down by XORing its halves.
#[inline]
#[must_use]
pub const fn mix(a: u64, b: u64) -> u64 {
    let (lo, hi) = mum(a, b);
    lo ^ hi
}

// =============================================================================
// READERS
// =============================================================================

/// Read 8 bytes at `offset` as a little-endian `u64`.
///
/// # Panics
/// Panics if `offset + 8 > p.len()`.
#[inline]
#[must_use]
pub fn read8(p: &[u8], offset: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&p[offset..offset + 8]);
    u64::from_le_bytes(buf)
}

/// Read 4 bytes at `offset` as a little-endian `u32`, zero-extended.
///
/// # Panics
/// Panics if `offset + 4 > p.len()`.
#[inline]
#[must_use]
pub fn read4(p: &[u8], offset: usize) -> u64 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&p[offset..offset + 4]);
    u64::from(u32::from_le_bytes(buf))
}

/// Pack 1 to 3 bytes into 24 bits: first, middle and last byte.
///
/// For `k == 1` the single byte lands in all three positions.
///
/// # Panics
/// Panics if `k == 0` or `k > p.len()`.
#[inline]
#[must_use]
pub fn read3(p: &[u8], k: usize) -> u64 {
    (u64::from(p[0]) << 16) | (u64::from(p[k >> 1]) << 8) | u64::from(p[k - 1])
}
