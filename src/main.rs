mod angles_cmd;
mod cli;
mod config;
mod logging;
mod parse;
mod time_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Angles(args) => angles_cmd::run(args),
        Command::Time(args) => time_cmd::run(args),
    }
}
