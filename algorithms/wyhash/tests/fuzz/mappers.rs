use bolero::check;
use std::num::NonZeroU64;
use wyhash::{wy2gau, wy2u01, wy2u0k};

#[test]
fn fuzz_bounded_range() {
    check!().with_type::<(u64, u64)>().for_each(|&(r, k)| {
        if let Some(bound) = NonZeroU64::new(k) {
            assert!(wy2u0k(r, bound) < k, "wy2u0k({r}, {k}) out of range");
        }
    });
}

#[test]
fn fuzz_unit_interval() {
    check!().with_type::<u64>().for_each(|&r| {
        let x = wy2u01(r);
        assert!((0.0..1.0).contains(&x), "wy2u01({r}) = {x}");
        let g = wy2gau(r);
        assert!((-3.0..3.0).contains(&g), "wy2gau({r}) = {g}");
    });
}
