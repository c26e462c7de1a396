//! ## strovare-cli
//! **Operational interface for the rover simulator**
//!
//! Reads a mission plan from a file, piped stdin, or interactive prompts,
//! replays it, and prints the final fleet report to stdout. Everything else
//! (logs, prompts, metrics dumps) goes to stderr.

use std::process::ExitCode;

use clap::Parser;

mod commands;
mod input;

use commands::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
