//! Generator for wyhash test vectors
//!
//! Generates the canonical JSON test vectors used by `tests/test_vectors.json`.
//! Covers the reference strings, every length-regime boundary, a seeded
//! variant of each, and hashes under a generated secret.
#![allow(clippy::unwrap_used)]
#![allow(clippy::cast_possible_truncation)]
use serde_json::json;
use wyhash::{make_secret, wyhash, Secret};

/// Same filler as `tests/vectors.rs`: byte `i` is `31 * i + 7`.
fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

fn main() {
    let mut vectors = Vec::new();
    let default = Secret::default();

    // =========================================================================
    // 1. REFERENCE STRINGS
    // =========================================================================

    for (name, input) in [
        ("empty", ""),
        ("single", "a"),
        ("short", "fjsakfdsjkf"),
        ("control_chars", "\r*@#*(&$kj Sas da \n"),
    ] {
        vectors.push(json!({
            "name": name,
            "input": input,
            "seed": 0,
            "secret_seed": null,
            "hash": wyhash(input.as_bytes(), 0, &default)
        }));
    }

    // =========================================================================
    // 2. LENGTH REGIME BOUNDARIES
    // =========================================================================

    let lengths = [1, 2, 3, 4, 7, 8, 15, 16, 17, 32, 47, 48, 49, 64, 96, 100, 1000, 10_000];
    for len in lengths {
        let input = pattern(len);
        for (suffix, seed) in [("", 0u64), ("_seeded", 0x1234_5678_9abc_def0)] {
            vectors.push(json!({
                "name": format!("pattern_{len}{suffix}"),
                "input": format!("PATTERN_{len}"),
                "seed": seed,
                "secret_seed": null,
                "hash": wyhash(&input, seed, &default)
            }));
        }
    }

    // =========================================================================
    // 3. GENERATED SECRET
    // =========================================================================

    let custom = make_secret(42);
    vectors.push(json!({
        "name": "custom_secret_short",
        "input": "fjsakfdsjkf",
        "seed": 0,
        "secret_seed": 42,
        "hash": wyhash(b"fjsakfdsjkf", 0, &custom)
    }));
    vectors.push(json!({
        "name": "custom_secret_pattern",
        "input": "PATTERN_100",
        "seed": 7,
        "secret_seed": 42,
        "hash": wyhash(&pattern(100), 7, &custom)
    }));

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
