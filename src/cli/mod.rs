//! Command-line interface module
//!
//! Handles argument parsing for the loader subcommands

pub mod args;

pub use args::*;
