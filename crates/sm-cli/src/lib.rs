//! Shared pieces of the `strassen` and `random-input` binaries.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use sm_core::{cpu, Strassen, StrassenConfig};
use sm_io::{display, generate, load_pair};

/// Exit code used when `--verify` finds a mismatch.
pub const EXIT_MISMATCH: u8 = 2;

/// Multiply two matrices read from a file with Strassen's algorithm and
/// print the diagonal of the product.
#[derive(Parser, Debug)]
#[command(name = "strassen")]
#[command(author, version, about, long_about = None)]
pub struct StrassenArgs {
    /// Cutoff dimension for the conventional kernel; 0 or less keeps the default
    #[arg(allow_negative_numbers = true)]
    pub flag: i64,

    /// Dimension of both operands (a power of two)
    pub dimension: usize,

    /// File holding 2 * dimension^2 integers: A's values, then B's
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Also compute the conventional product and compare
    #[arg(long)]
    pub verify: bool,

    /// Print the whole product when it is small
    #[arg(long)]
    pub show: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl StrassenArgs {
    pub fn config(&self) -> StrassenConfig {
        StrassenConfig::from_flag(usize::try_from(self.flag).ok())
    }
}

/// Write random operand files for `strassen`.
#[derive(Parser, Debug)]
#[command(name = "random-input")]
#[command(author, version, about, long_about = None)]
pub struct RandomInputArgs {
    /// Dimension of each generated operand
    pub dimension: usize,

    /// Output file name
    #[arg(short, long, value_name = "FILE", default_value = "inputfile")]
    pub output: PathBuf,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Install the global tracing subscriber, writing to stderr.
pub fn init_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Result of a `strassen` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The product was computed (and matched, if verified).
    Done,
    /// `--verify` found the conventional product differs.
    Mismatch,
}

/// Load, multiply, and print to `out`.
pub fn run_strassen<W: Write>(args: &StrassenArgs, out: &mut W) -> Result<Outcome> {
    if !args.dimension.is_power_of_two() {
        bail!("dimension {} is not a power of two", args.dimension);
    }
    let config = args.config();
    let (a, b) = load_pair(&args.input, args.dimension)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let start = Instant::now();
    let mut engine = Strassen::new(config);
    let product = engine.multiply(&a, &b)?;
    info!(
        dimension = args.dimension,
        cutoff = config.cutoff,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "strassen multiply finished"
    );

    let mut outcome = Outcome::Done;
    if args.verify {
        let start = Instant::now();
        let expected = cpu::multiply(&a, &b)?;
        info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "conventional multiply finished"
        );
        if !product.matches(&expected)? {
            warn!("strassen product differs from conventional product");
            outcome = Outcome::Mismatch;
        }
    }

    if args.show {
        match display::show(&product) {
            Some(text) => write!(out, "{}", text)?,
            None => info!(rows = product.rows(), "product too large to show"),
        }
    }
    write!(out, "{}", display::diagonal(&product))?;
    Ok(outcome)
}

/// Generate the input file described by `args`.
pub fn run_random_input(args: &RandomInputArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate::write_input_file(&args.output, args.dimension, &mut rng)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(
        dimension = args.dimension,
        path = %args.output.display(),
        "wrote random input"
    );
    Ok(())
}
