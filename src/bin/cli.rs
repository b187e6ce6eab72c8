// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::Result;

use deskkit::{cli, log};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = cli::Cli::parse();
    let _log_guard = log::init(args.log_level.as_deref())?;

    cli::run_stdio(args.tool)?;
    Ok(())
}
