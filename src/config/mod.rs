//! Configuration management module
//!
//! Resolves the launcher's settings from the environment once at startup

pub mod settings;

pub use settings::*;
