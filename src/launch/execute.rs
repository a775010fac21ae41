//! External process execution for launch plans

use crate::error::LoaderError;
use crate::launch::plan::LaunchPlan;
use anyhow::Result;
use std::process::{Command, Stdio};
use tracing::debug;

/// Result of running a launch plan
///
/// The import tool's streams are captured rather than discarded so the
/// caller can decide what to do with them; the launcher itself never
/// interprets the output.
#[derive(Debug, Clone)]
pub struct LaunchOutcome {
    /// Exit code of the child process
    pub exit_code: i32,
    /// Everything the child wrote to standard output
    pub stdout: String,
    /// Everything the child wrote to standard error
    pub stderr: String,
}

impl LaunchOutcome {
    /// Whether the child exited with code zero
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run the plan and wait for the child to finish
///
/// # Errors
///
/// Returns a launch error if the program cannot be spawned at all (not
/// installed, not executable). A child that starts and then fails is NOT
/// an error here; its exit code is reported in the outcome.
pub fn execute(plan: &LaunchPlan) -> Result<LaunchOutcome> {
    debug!("Executing: {} {}", plan.program, plan.args.join(" "));

    let output = Command::new(&plan.program)
        .args(&plan.args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|err| {
            LoaderError::launch(format!("Failed to execute '{}': {err}", plan.program))
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    return Ok(LaunchOutcome {
        // A signal-terminated child has no code; report generic failure
        exit_code: output.status.code().unwrap_or(1),
        stdout,
        stderr,
    });
}
