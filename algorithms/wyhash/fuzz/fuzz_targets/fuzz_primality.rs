#![no_main]

use libfuzzer_sys::fuzz_target;
use wyhash::is_prime;

/// Modular exponentiation in 128-bit arithmetic as an independent reference.
fn pow_mod_wide(mut a: u128, mut e: u128, m: u128) -> u128 {
    let mut r = 1 % m;
    a %= m;
    while e > 0 {
        if e & 1 == 1 {
            r = r * a % m;
        }
        a = a * a % m;
        e >>= 1;
    }
    r
}

fuzz_target!(|data: [u8; 8]| {
    let n = u64::from_le_bytes(data) | 1;
    if n < 17 {
        return;
    }

    // A reported prime must satisfy Fermat's little theorem for every witness.
    if is_prime(n) {
        for a in [2u128, 3, 5, 7, 11, 13] {
            let n = u128::from(n);
            assert_eq!(pow_mod_wide(a, n - 1, n), 1, "{n} fails Fermat base {a}");
        }
    }

    // Products of two odd factors are never prime.
    let small = u64::from(data[0] | 1).max(3);
    if let Some(product) = (n >> 8).max(3).checked_mul(small) {
        assert!(!is_prime(product), "{product} reported prime");
    }
});
