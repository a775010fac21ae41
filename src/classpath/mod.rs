//! Classpath assembly from the installation's library directory
//!
//! Mirrors what a `lib/*.jar` glob would produce: every archive directly
//! inside the directory, each path followed by the platform separator.

use crate::error::LoaderError;
use crate::system::System;
use anyhow::Result;
use core::fmt;
use std::path::{Path, PathBuf};

/// Classpath entry separator for the host OS family
#[cfg(windows)]
pub const SEPARATOR: char = ';';
/// Classpath entry separator for the host OS family
#[cfg(not(windows))]
pub const SEPARATOR: char = ':';

const ARCHIVE_EXTENSION: &str = "jar";

/// A separator-joined list of archive paths, ready to hand to the JVM
///
/// Every entry is terminated by [`SEPARATOR`], trailing separator included.
/// An installation with no archives yields an empty classpath, which is a
/// valid (if useless) value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classpath(String);

impl Classpath {
    /// View the classpath as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether no archives were found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Classpath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the classpath from the archives in `lib_dir`
///
/// The scan is non-recursive and matches regular files with a `jar`
/// extension. Matches are sorted lexicographically so repeated invocations
/// produce identical classpaths.
///
/// # Errors
///
/// Returns a filesystem error if the directory exists but cannot be read.
/// A missing directory is treated as zero archives.
pub fn resolve(system: &dyn System, lib_dir: &Path) -> Result<Classpath> {
    if !system.is_dir(lib_dir) {
        return Ok(Classpath(String::new()));
    }

    let entries = system.read_dir(lib_dir).map_err(|err| {
        LoaderError::filesystem(format!(
            "Failed to scan library directory '{}': {err}",
            lib_dir.display()
        ))
    })?;

    let mut archives: Vec<PathBuf> = entries
        .into_iter()
        .filter(|path| system.is_file(path) && is_archive(path))
        .collect();
    archives.sort();

    Ok(join(&archives, SEPARATOR))
}

fn is_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == ARCHIVE_EXTENSION)
}

/// Concatenate archive paths, each followed by `separator`
fn join(archives: &[PathBuf], separator: char) -> Classpath {
    let mut classpath = String::new();
    for archive in archives {
        classpath.push_str(&archive.to_string_lossy());
        classpath.push(separator);
    }
    Classpath(classpath)
}
