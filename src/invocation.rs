//! Compiler invocation assembly
//!
//! Owns the fixed HDF5 flag sequence and turns one CLI request into the
//! argument vector handed to g++.

use std::path::PathBuf;

/// Compiler program invoked for every build
pub const COMPILER: &str = "g++";

/// Output executable name used when none is given
pub const DEFAULT_OUTPUT: &str = "a.out";

/// Selector literal that enables optimization; matched exactly
pub const OPT_SELECTOR: &str = "opt";

/// Optimization flag appended when the selector matches
pub const OPT_FLAG: &str = "-O3";

/// Fixed compiler/linker flag sequence for the system HDF5 serial install.
///
/// Order matters to the linker: the high-level C++ archives come first,
/// then the libraries they pull in.
pub const COMPILE_FLAGS: &[&str] = &[
    "-I/usr/include/hdf5/serial",
    "-L/usr/lib/x86_64-linux-gnu/hdf5/serial",
    "/usr/lib/x86_64-linux-gnu/hdf5/serial/libhdf5_hl_cpp.a",
    "/usr/lib/x86_64-linux-gnu/hdf5/serial/libhdf5_cpp.a",
    "/usr/lib/x86_64-linux-gnu/hdf5/serial/libhdf5_hl.a",
    "/usr/lib/x86_64-linux-gnu/hdf5/serial/libhdf5.a",
    "-lcrypto",
    "-lcurl",
    "-lpthread",
    "-lsz",
    "-lz",
    "-ldl",
    "-lm",
    "-Wl,-rpath",
    "-Wl,/usr/lib/x86_64-linux-gnu/hdf5/serial",
    "-std=c++11",
];

/// One compile request, built from process arguments and consumed once
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Source file to compile; existence is the compiler's problem
    pub source: PathBuf,

    /// Output executable path
    pub output: PathBuf,

    /// Whether to append the optimization flag
    pub optimize: bool,
}

impl Invocation {
    /// Create an invocation from the positional arguments.
    ///
    /// Optimization is enabled only when the selector equals the literal
    /// `opt`; any other value leaves it disabled.
    pub fn new(source: PathBuf, output: PathBuf, selector: Option<&str>) -> Self {
        Self {
            source,
            output,
            optimize: selector == Some(OPT_SELECTOR),
        }
    }

    /// Argument vector for the compiler, without the program name.
    ///
    /// In order: source, `-o`, output, the fixed flag sequence verbatim,
    /// then `-O3` last when optimization is enabled. Program and arguments
    /// are passed to the spawn primitive separately; no shell is involved.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(COMPILE_FLAGS.len() + 4);
        args.push(self.source.display().to_string());
        args.push("-o".to_string());
        args.push(self.output.display().to_string());
        args.extend(COMPILE_FLAGS.iter().map(|f| f.to_string()));
        if self.optimize {
            args.push(OPT_FLAG.to_string());
        }
        args
    }

    /// Render the full command line for display only; never executed
    pub fn command_line(&self) -> String {
        let mut line = String::from(COMPILER);
        for arg in self.to_args() {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }
}
