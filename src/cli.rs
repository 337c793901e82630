//! CLI argument parsing using clap derive macros

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::error::Gcch5Error;
use crate::exec::subprocess::run_command;
use crate::invocation::{Invocation, COMPILER, DEFAULT_OUTPUT};
use crate::utils::tools::require_tool;

/// GCCH5 - g++ wrapper for HDF5 C++ programs
///
/// Compiles a single C++ source file against the system HDF5 serial
/// installation with a fixed set of include and link flags.
#[derive(Parser, Debug)]
#[command(name = "gcch5")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// C++ source file to compile
    pub source: PathBuf,

    /// Output executable path
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Pass the literal `opt` to compile with -O3; any other value is ignored
    pub selector: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Execute the compile and return the child's exit code as our own
    pub fn execute(self) -> Result<ExitCode> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        let invocation = Invocation::new(self.source, self.output, self.selector.as_deref());

        let compiler = require_tool(COMPILER, "compiling HDF5 C++ programs")?;

        if self.verbose {
            match &compiler.version {
                Some(version) => eprintln!(
                    "Using {}: {} ({})",
                    compiler.name,
                    compiler.path.display(),
                    version
                ),
                None => eprintln!("Using {}: {}", compiler.name, compiler.path.display()),
            }
            eprintln!("Running: {}", invocation.command_line());
        }

        let result = run_command(COMPILER, &invocation.to_args())?;

        if self.verbose {
            if result.success {
                eprintln!(
                    "✓ {} built in {:.2}s",
                    invocation.output.display(),
                    result.duration.as_secs_f64()
                );
            } else {
                eprintln!("Compiler failed after {:.2}s", result.duration.as_secs_f64());
            }
        }

        match result.exit_code {
            Some(code) => Ok(ExitCode::from(u8::try_from(code).unwrap_or(1))),
            None => Err(Gcch5Error::signaled(COMPILER).into()),
        }
    }
}
