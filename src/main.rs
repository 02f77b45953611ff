mod cli;
mod operations;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut log = operations::logger(cli.padding, !cli.no_color);

    match cli.command {
        Command::Demo => {
            operations::demo::run_demo(&mut log);
        }
        Command::Run { label, command } => {
            if !operations::run::run_command(&mut log, &label, &command)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Status { text, err } => {
            operations::status::run_status(&mut log, &text, err);
        }
    }

    Ok(ExitCode::SUCCESS)
}
