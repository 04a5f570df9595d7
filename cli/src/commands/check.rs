//! Check Command
//!
//! Verify checksums from file (like sha256sum -c).

use super::KeyArgs;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use tracing::warn;

// =============================================================================
// CHECK
// =============================================================================

/// Verify checksums from a checksum file.
///
/// The seed and secret must match the ones used to produce the list.
pub fn check_mode(checksum_file: &PathBuf, key: &KeyArgs) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let hasher = key.hasher();
    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Format: "hash  filename" (two spaces)
        let Some((expected_hex, file_path)) = line.split_once("  ") else {
            warn!(line, "invalid checksum line");
            continue;
        };
        let Ok(expected) = u64::from_str_radix(expected_hex.trim(), 16) else {
            warn!(line, "checksum is not a 64-bit hex value");
            continue;
        };
        let file_path = file_path.trim();
        total += 1;

        match std::fs::read(file_path) {
            Ok(data) => {
                if hasher.hash(&data) == expected {
                    println!("{file_path}: OK");
                } else {
                    println!("{file_path}: FAILED");
                    failed += 1;
                }
            }
            Err(e) => {
                println!("{file_path}: FAILED ({e})");
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} checksums verified");
    } else {
        eprintln!("WARNING: {failed} of {total} checksums did NOT match");
        std::process::exit(1);
    }

    Ok(())
}
