//! # `netbox-loader`
//!
//! `netbox-loader` is a command-line launcher for NetBox's Java-based
//! import tools. It computes the classpath from the `NETBOX_HOME`
//! installation, then hands off to the requested import class in an
//! external JVM process.
//!
//! ## Usage
//!
//! **Import an HPRD flat file:**
//! ```sh
//! netbox-loader load-hprd HPRD_Release_7.txt
//! ```
//!
//! **Import a SIF file under a data source name:**
//! ```sh
//! netbox-loader load-sif network.sif CELL_MAP
//! ```
//!
//! **Preview the JVM invocation without running it:**
//! ```sh
//! netbox-loader load-hprd HPRD_Release_7.txt --dry-run
//! ```
//!
//! See `netbox-loader --help` for more options and details.

use anyhow::Result;
use clap::Parser as _;
use netbox_loader::cli::Cli;
use netbox_loader::error::LoaderError;
use netbox_loader::system::RealSystem;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    // Don't let launcher chatter drown the dry-run preview
    let log_level = if cli.dry_run {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_target(false).with_env_filter(filter).init();

    let system = RealSystem::new();
    match netbox_loader::run(&cli, &system) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<LoaderError>()
                    .map_or(1, LoaderError::exit_code),
            );
        }
    }
}
