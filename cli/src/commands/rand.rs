//! Rand Command
//!
//! Emit values from `wyrand` (or the time-seeded `wytrand`) through one of the
//! distribution mappers.

use anyhow::Result;
use clap::ValueEnum;
use wyhash::{WyRng, Wyrand, Wytrand};

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum Distribution {
    /// Raw 64-bit values
    U64,
    /// Uniform floats in [0, 1)
    F64,
    /// Approximately normal floats
    Gaussian,
    /// Integers in [0, bound)
    Below,
}

/// Draw `count` values and print one per line.
pub fn rand_mode(seed: u64, count: usize, dist: Distribution, bound: u64, time: bool) -> Result<()> {
    if time {
        emit(&mut Wytrand::new(seed), count, dist, bound)
    } else {
        emit(&mut Wyrand::new(seed), count, dist, bound)
    }
}

fn emit(rng: &mut impl WyRng, count: usize, dist: Distribution, bound: u64) -> Result<()> {
    for _ in 0..count {
        match dist {
            Distribution::U64 => println!("{}", rng.next_u64()),
            Distribution::F64 => println!("{}", rng.next_f64()),
            Distribution::Gaussian => println!("{}", rng.next_gaussian()),
            Distribution::Below => println!("{}", rng.next_below(bound)?),
        }
    }
    Ok(())
}
