//! `netbox-loader` - A CLI launcher for the NetBox Java import tools
//!
//! This library resolves a Java classpath from the `NETBOX_HOME`
//! installation's `lib/` directory and starts the requested import class
//! (`ImportHprd` or `ImportSif`) in an external JVM process, forwarding
//! the user's arguments verbatim.

pub mod classpath;
pub mod cli;
pub mod config;
pub mod error;
pub mod launch;
pub mod system;

use anyhow::Result;
use cli::Cli;
use config::Settings;
use error::LoaderError;
use launch::LaunchPlan;
use launch::to_command_line::{OutputFormat, render_command_line};
use system::System;
use tracing::debug;

/// Main entry point for the loader library
///
/// Resolves settings and classpath, builds the launch plan for the parsed
/// subcommand, and either prints it (`--dry-run`) or executes it. Returns
/// the exit code the process should terminate with; on success that is
/// the import tool's own exit code.
///
/// # Errors
///
/// Returns an error if `NETBOX_HOME` is unset, the library directory
/// cannot be scanned, or the JVM process cannot be spawned.
pub fn run(cli: &Cli, system: &dyn System) -> Result<i32> {
    let settings = Settings::from_system(system, cli.java.clone())?;

    let classpath = classpath::resolve(system, &settings.lib_dir())?;
    debug!("Resolved classpath: {classpath}");

    let plan = LaunchPlan::for_command(&settings, &classpath, &cli.command);

    if cli.dry_run {
        let format = cli
            .output_format
            .parse::<OutputFormat>()
            .map_err(LoaderError::configuration)?;

        // Plain stdout output, not logging
        println!("{}", render_command_line(&plan, format)?);
        return Ok(0);
    }

    let outcome = launch::execute(&plan)?;

    // Pass the import tool's streams through untouched
    print!("{}", outcome.stdout);
    eprint!("{}", outcome.stderr);

    if !outcome.success() {
        debug!("Import tool exited with code {}", outcome.exit_code);
    }

    Ok(outcome.exit_code)
}
