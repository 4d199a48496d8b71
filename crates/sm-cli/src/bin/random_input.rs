use anyhow::Result;
use clap::Parser;

use sm_cli::{init_logging, run_random_input, RandomInputArgs};

fn main() -> Result<()> {
    let args = RandomInputArgs::parse();
    init_logging(args.verbose)?;
    run_random_input(&args)
}
