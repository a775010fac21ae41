//! Launch module
//!
//! Builds the external JVM command line and executes it

pub mod execute;
pub mod plan;
pub mod to_command_line;

pub use execute::*;
pub use plan::*;
