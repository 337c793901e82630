//! GCCH5 CLI - a thin g++ wrapper for HDF5 C++ programs
//!
//! Builds one C++ source file against the system HDF5 serial install with
//! a fixed include/link flag set. The compiler is spawned with a separated
//! argument vector, never through a shell, and its exit code becomes this
//! process's exit code.

mod cli;
mod error;
mod exec;
mod invocation;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use console::style;

use cli::Cli;
use error::Gcch5Error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.execute() {
        Ok(code) => code,
        Err(err) => {
            match err.downcast_ref::<Gcch5Error>() {
                Some(e) => e.display_with_hints(),
                None => eprintln!("{} {:#}", style("ERROR:").red().bold(), err),
            }
            ExitCode::FAILURE
        }
    }
}
