//! sqlvm-errors CLI - inspect SQL VM error codes and records

use std::process::ExitCode;

use sqlvm_errors::cli::Cli;

fn main() -> ExitCode {
    match Cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
