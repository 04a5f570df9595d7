//! wyhash Basic Example
//!
//! Minimal usage: `let h = Wyhash::new(seed).hash(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

use wyhash::{WyRng, Wyhash, Wyrand};

fn main() {
    // Zero boilerplate:
    let data = b"Hello, World!";
    let hash = Wyhash::new(0).hash(data);

    println!("Data: {:?}", String::from_utf8_lossy(data));
    println!("Hash: {hash:016x}");

    // Deterministic random numbers from the same core:
    let mut rng = Wyrand::new(hash);
    println!("Rand: {:016x} {:.6} {:+.6}", rng.next_u64(), rng.next_f64(), rng.next_gaussian());
}
