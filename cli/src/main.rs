//! wyhash CLI
//!
//! Hash files, verify checksum lists, generate secrets and draw random numbers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_files, hash_text, print_secret, rand_mode, Distribution, KeyArgs};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "wyhash")]
#[command(about = "Fast non-cryptographic 64-bit hash and PRNG", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    #[command(flatten)]
    key: KeyArgs,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: Level,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (format: "<16 hex digits>  <path>")
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
    /// Hash a literal UTF-8 string
    Text {
        #[arg(value_name = "STRING")]
        text: String,
    },
    /// Generate a custom secret from a seed
    Secret {
        #[arg(value_name = "SEED")]
        seed: u64,
    },
    /// Draw values from the deterministic PRNG
    Rand {
        /// PRNG seed
        #[arg(short, long, default_value_t = 0)]
        seed: u64,

        /// Number of values to draw
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,

        /// Output distribution
        #[arg(short, long, value_enum, default_value_t = Distribution::U64)]
        dist: Distribution,

        /// Exclusive upper bound for `--dist below`
        #[arg(short, long, default_value_t = 100)]
        bound: u64,

        /// Mix in the wall clock (non-reproducible)
        #[arg(long)]
        time: bool,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file, &cli.key)?,
        Some(Commands::Text { text }) => hash_text(text, &cli.key),
        Some(Commands::Secret { seed }) => print_secret(*seed),
        Some(Commands::Rand {
            seed,
            count,
            dist,
            bound,
            time,
        }) => rand_mode(*seed, *count, *dist, *bound, *time)?,
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: wyhash [FILE]... or wyhash --help");
                std::process::exit(1);
            }

            hash_files(&cli.files, &cli.key)?;
        }
    }

    Ok(())
}
