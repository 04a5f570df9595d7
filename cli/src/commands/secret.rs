//! Secret Command
//!
//! Print a generated secret, one word per line.

use wyhash::make_secret;

/// Generate and print the secret for `seed`.
pub fn print_secret(seed: u64) {
    let secret = make_secret(seed);
    for word in secret.as_array() {
        println!("0x{word:016x}");
    }
}
