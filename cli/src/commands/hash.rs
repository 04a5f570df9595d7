//! Hash Command
//!
//! File hashing with automatic parallelization via Rayon.

use super::KeyArgs;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::debug;

/// Hash files (Rayon parallelizes automatically when beneficial).
///
/// Output order follows the argument order regardless of completion order.
pub fn hash_files(files: &[PathBuf], key: &KeyArgs) -> Result<()> {
    let hasher = key.hasher();

    let results: Vec<(&PathBuf, Result<u64>)> = files
        .par_iter()
        .map(|file_path| {
            let result = std::fs::read(file_path)
                .with_context(|| format!("Failed to open: {}", file_path.display()))
                .map(|data| {
                    debug!(path = %file_path.display(), bytes = data.len(), "hashing file");
                    hasher.hash(&data)
                });
            (file_path, result)
        })
        .collect();

    let mut failed = 0usize;
    for (file_path, result) in results {
        match result {
            Ok(hash) => println!("{hash:016x}  {}", file_path.display()),
            Err(e) => {
                eprintln!("Error: {}: {e:#}", file_path.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {failed} file(s)");
    }

    Ok(())
}

/// Hash a literal string as its UTF-8 bytes.
pub fn hash_text(text: &str, key: &KeyArgs) {
    let hash = key.hasher().hash(text);
    println!("{hash:016x}  {text:?}");
}
