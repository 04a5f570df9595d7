//! CLI Commands
//!
//! All wyhash CLI commands organized as separate modules.

mod check;
mod hash;
mod rand;
mod secret;

use clap::Args;
use tracing::debug;
use wyhash::Wyhash;

pub use check::check_mode;
pub use hash::{hash_files, hash_text};
pub use rand::{rand_mode, Distribution};
pub use secret::print_secret;

/// Seed and secret selection shared by the hashing commands.
#[derive(Args, Clone, Copy, Debug)]
pub struct KeyArgs {
    /// Hash seed
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Derive a custom secret from this seed (default secret if omitted)
    #[arg(long, value_name = "SEED")]
    secret_seed: Option<u64>,
}

impl KeyArgs {
    /// Build the keyed hasher, generating the secret if requested.
    pub fn hasher(&self) -> Wyhash {
        match self.secret_seed {
            Some(secret_seed) => {
                let secret = Wyhash::make_secret(secret_seed);
                debug!(secret_seed, %secret, "generated custom secret");
                Wyhash::with_secret(self.seed, secret)
            }
            None => Wyhash::new(self.seed),
        }
    }
}
