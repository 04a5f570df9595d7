use bolero::check;
use wyhash::is_prime;

/// Reference test for small inputs.
fn trial_division(n: u64) -> bool {
    n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

#[test]
fn fuzz_matches_trial_division() {
    check!().with_type::<u32>().for_each(|&n| {
        let n = u64::from(n >> 8);
        assert_eq!(is_prime(n), trial_division(n), "is_prime({n})");
    });
}

#[test]
fn fuzz_products_are_composite() {
    check!().with_type::<(u32, u32)>().for_each(|&(a, b)| {
        let (a, b) = (u64::from(a), u64::from(b));
        if a >= 2 && b >= 2 {
            assert!(!is_prime(a * b), "{a} * {b} reported prime");
        }
    });
}
