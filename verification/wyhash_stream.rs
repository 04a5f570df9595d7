//! # `PractRand` Stream Generator
//!
//! Writes an endless little-endian stream of 64-bit outputs to stdout for
//! statistical test suites:
//!
//! ```text
//! wyhash_stream wyrand --seed 1 | RNG_test stdin64
//! ```

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::{info, Level};
use wyhash::{wyhash, wyhash64, wyrand, Secret};

/// Which generator feeds the stream.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Stateful `wyrand` sequence
    Wyrand,
    /// `wyhash64(counter, seed)`
    Wyhash64,
    /// One-shot hash of the 8-byte little-endian counter
    Counter,
}

#[derive(Parser)]
#[command(about = "Endless output stream for PractRand / TestU01")]
struct Args {
    /// Generator to stream
    #[arg(value_enum, default_value_t = Mode::Wyrand)]
    mode: Mode,

    /// Initial state, or the fixed second input for counter modes
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Stop after this many 64-bit words (endless when omitted)
    #[arg(long)]
    limit: Option<u64>,

    /// Diagnostic verbosity (written to stderr)
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(mode = ?args.mode, seed = args.seed, limit = ?args.limit, "starting stream");

    let secret = Secret::default();
    let mut state = args.seed;
    let mut counter: u64 = 0;
    let mut handle = BufWriter::new(io::stdout().lock());

    while args.limit.is_none_or(|limit| counter < limit) {
        let word = match args.mode {
            Mode::Wyrand => wyrand(&mut state),
            Mode::Wyhash64 => wyhash64(counter, args.seed),
            Mode::Counter => wyhash(&counter.to_le_bytes(), args.seed, &secret),
        };

        // A closed pipe is the normal way the consumer ends the run
        if handle.write_all(&word.to_le_bytes()).is_err() {
            info!(words = counter, "consumer closed the stream");
            return Ok(());
        }

        counter = counter.wrapping_add(1);
    }

    handle.flush()?;
    Ok(())
}
