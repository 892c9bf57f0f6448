//! `resize-logo` entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the fixed derivation
//! in the current directory, and exit with an appropriate status.

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::report_error(&err, &mut std::io::stderr());
            ExitCode::FAILURE
        }
    }
}
