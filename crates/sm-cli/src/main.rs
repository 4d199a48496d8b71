use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use sm_cli::{init_logging, run_strassen, Outcome, StrassenArgs, EXIT_MISMATCH};

fn main() -> Result<ExitCode> {
    let args = StrassenArgs::parse();
    init_logging(args.verbose)?;

    let stdout = std::io::stdout();
    let outcome = run_strassen(&args, &mut stdout.lock())?;
    Ok(match outcome {
        Outcome::Done => ExitCode::SUCCESS,
        Outcome::Mismatch => ExitCode::from(EXIT_MISMATCH),
    })
}
