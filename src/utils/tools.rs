//! Compiler detection with helpful install hints

use std::path::PathBuf;
use std::process::Command;

use anyhow::Result;
use which::which;

use crate::error::{hints, Gcch5Error};

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Tool name
    pub name: String,
    /// Path to the tool executable
    pub path: PathBuf,
    /// Tool version string (if available)
    pub version: Option<String>,
}

/// Check if a tool exists and return its information
pub fn check_tool(tool_name: &str) -> Option<ToolInfo> {
    match which(tool_name) {
        Ok(path) => {
            let version = get_tool_version(tool_name);
            Some(ToolInfo {
                name: tool_name.to_string(),
                path,
                version,
            })
        }
        Err(_) => None,
    }
}

/// Get tool version by running `tool --version`
fn get_tool_version(tool_name: &str) -> Option<String> {
    let output = Command::new(tool_name).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let version = String::from_utf8_lossy(&output.stdout);
    Some(version.lines().next().unwrap_or("").trim().to_string())
}

/// Require a tool to exist, return error with hint if missing
pub fn require_tool(tool_name: &str, required_for: &str) -> Result<ToolInfo> {
    match check_tool(tool_name) {
        Some(info) => Ok(info),
        None => Err(Gcch5Error::missing_tool(
            tool_name,
            required_for,
            get_tool_hint(tool_name),
        )
        .into()),
    }
}

/// Get installation hint for a tool
fn get_tool_hint(tool_name: &str) -> &'static str {
    match tool_name {
        "g++" | "gcc" => hints::gxx(),
        _ => "Install this tool and ensure it's in your PATH",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_common_tools() {
        // sh exists on any Unix development system
        let info = check_tool("sh");
        assert!(info.is_some());
        assert_eq!(info.unwrap().name, "sh");
    }

    #[test]
    fn test_missing_tool_carries_a_hint() {
        let err = require_tool("gcch5-no-such-tool", "testing").unwrap_err();
        let err = err.downcast::<Gcch5Error>().unwrap();
        match err {
            Gcch5Error::MissingTool { tool, hint, .. } => {
                assert_eq!(tool, "gcch5-no-such-tool");
                assert!(hint.contains("PATH"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
