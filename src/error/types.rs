//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for launcher failures
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoaderError {
    /// Configuration Error - missing or invalid configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Filesystem Error - library directory scan failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },

    /// Launch Error - the JVM process could not be started
    #[error("Launch error: {message}")]
    Launch { message: String },
}

impl LoaderError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Filesystem { .. } => 2,
            Self::Launch { .. } => 3,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }

    /// Create a launch error
    #[inline]
    pub fn launch<S: Into<String>>(message: S) -> Self {
        Self::Launch {
            message: message.into(),
        }
    }
}
