//! Render a launch plan as a command line without executing it

use core::str::FromStr;

use crate::launch::plan::LaunchPlan;
use anyhow::Result;

/// Output format for command-line representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutputFormat {
    /// Shell-escaped command ready to execute
    Shell,
    /// JSON object with program and argument vector
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shell" => Ok(Self::Shell),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {s}. Use 'shell' or 'json'")),
        }
    }
}

/// Render the plan in the requested format
///
/// # Errors
///
/// Returns an error if the plan cannot be serialized to the requested
/// format.
pub fn render_command_line(plan: &LaunchPlan, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Shell => Ok(format_as_shell(plan)),
        OutputFormat::Json => format_as_json(plan),
    }
}

/// Format the plan as a single shell command with proper escaping
fn format_as_shell(plan: &LaunchPlan) -> String {
    let mut output = shell_escape(&plan.program);

    for arg in &plan.args {
        output.push(' ');
        output.push_str(&shell_escape(arg));
    }

    output
}

/// Format the plan as a JSON object
fn format_as_json(plan: &LaunchPlan) -> Result<String> {
    serde_json::to_string_pretty(plan)
        .map_err(|e| anyhow::anyhow!("Failed to serialize to JSON: {e}"))
}

/// Escape a string for shell execution
/// Uses double quotes for safety, escaping special characters inside
fn shell_escape(s: &str) -> String {
    // If string contains no special characters, return as-is
    if !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '/' || c == '.' || c == ':'
        })
    {
        return s.to_owned();
    }

    // Otherwise, wrap in double quotes and escape special chars
    let mut result = String::from('"');
    for ch in s.chars() {
        match ch {
            '"' => result.push_str(r#"\""#),
            '\\' => result.push_str(r"\\"),
            '$' => result.push_str(r"\$"),
            '`' => result.push_str(r"\`"),
            '!' => result.push_str(r"\!"),
            _ => result.push(ch),
        }
    }
    result.push('"');
    result
}
