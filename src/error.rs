//! Error types and helpers for user-friendly error messages
//!
//! Only failures raised by this tool itself get typed errors. Compiler
//! diagnostics are never caught or translated; they reach the terminal
//! directly through the child's inherited streams.

use thiserror::Error;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum Gcch5Error {
    /// Tool/executable not found on PATH
    #[error("Missing tool: {tool}")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// Child process terminated by a signal, so there is no exit code
    #[error("{program} was terminated by a signal")]
    Signaled { program: String },
}

impl Gcch5Error {
    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a signal termination error
    pub fn signaled(program: impl Into<String>) -> Self {
        Self::Signaled {
            program: program.into(),
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        match self {
            Gcch5Error::MissingTool {
                required_for, hint, ..
            } => {
                eprintln!("\n{} {}", style("REQUIRED FOR:").cyan().bold(), required_for);
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
            }
            Gcch5Error::Signaled { .. } => {}
        }

        eprintln!();
    }
}

/// Common error hints for missing tools
pub mod hints {
    /// Get hint for missing g++
    pub fn gxx() -> &'static str {
        "Install g++ from your package manager:\n\
         • Ubuntu: sudo apt install g++\n\
         • Fedora: sudo dnf install gcc-c++\n\
         • macOS: xcode-select --install"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_message_names_the_tool() {
        let err = Gcch5Error::missing_tool("g++", "compiling", hints::gxx());
        assert_eq!(err.to_string(), "Missing tool: g++");
    }

    #[test]
    fn test_signaled_message_names_the_program() {
        let err = Gcch5Error::signaled("g++");
        assert!(err.to_string().contains("g++"));
        assert!(err.to_string().contains("signal"));
    }
}
