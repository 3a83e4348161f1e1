use anyhow::Result;
use clap::Parser;

use heatcurve_core::cli::{run, CliArgs};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    print!("{}", run(&args)?);
    Ok(())
}
