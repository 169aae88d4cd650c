// src/bin/cli.rs
use std::process::ExitCode;

use clap::Parser;
use rowscrape::cli::{self, Args};

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();
    rowscrape::log::init(args.verbose, args.log_file.as_deref())?;
    cli::run(args)
}
