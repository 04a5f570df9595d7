use bolero::check;
use std::hash::Hasher;
use wyhash::{wyhash, Secret, WyHasher, Wyhash};

#[test]
fn fuzz_hash_determinism() {
    check!().with_type::<(Vec<u8>, u64)>().for_each(|(data, seed)| {
        let secret = Secret::default();
        let first = wyhash(data, *seed, &secret);
        assert_eq!(first, wyhash(data, *seed, &secret), "Hash must be deterministic");
        assert_eq!(first, Wyhash::new(*seed).hash(data), "Wrapper mismatch");
    });
}

#[test]
fn fuzz_adapter_split_consistency() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // BASELINE (ONE-SHOT)
        // =============================================================================
        let expected = Wyhash::new(0).hash(data);

        // =============================================================================
        // BUFFERED VARIATIONS
        // =============================================================================

        // 1. Byte-by-Byte (Small Inputs Only)
        if data.len() < 256 {
            let mut hasher = WyHasher::new(0);
            for b in data {
                hasher.write(&[*b]);
            }
            assert_eq!(hasher.finish(), expected, "Byte-by-byte mismatch");
        }

        // 2. Arbitrary Split Points
        if data.len() > 1 {
            for split_idx in [1, data.len() / 2, data.len() - 1] {
                let mut hasher = WyHasher::new(0);
                let (first, second) = data.split_at(split_idx);
                hasher.write(first);
                hasher.write(second);
                assert_eq!(hasher.finish(), expected, "Split at {split_idx} mismatch");
            }
        }
    });
}
