#![no_main]

use libfuzzer_sys::fuzz_target;
use std::hash::Hasher;
use wyhash::{wyhash, Secret, WyHasher, Wyhash};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // First 8 bytes (if present) become the seed, the rest is the message
    let (seed, msg) = if data.len() >= 8 {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&data[..8]);
        (u64::from_le_bytes(raw), &data[8..])
    } else {
        (0, data)
    };

    // =============================================================================
    // 1. ONE-SHOT VS WRAPPER
    // =============================================================================

    let reference = wyhash(msg, seed, &Secret::default());
    assert_eq!(
        reference,
        Wyhash::new(seed).hash(msg),
        "Wrapper and core disagree"
    );

    // =============================================================================
    // 2. BUFFERED ADAPTER
    // =============================================================================

    // Chunk size is derived from the first message byte (1 to 255)
    let chunk_size = msg.first().map_or(1, |&b| (b as usize % 255) + 1);

    let mut hasher = WyHasher::new(seed);
    for chunk in msg.chunks(chunk_size) {
        hasher.write(chunk);
    }

    assert_eq!(
        reference,
        hasher.finish(),
        "Buffered and one-shot approaches differ!"
    );
});
