//! Mock system implementation for testing

use super::System;
use std::collections::{HashMap, HashSet};
use std::env::VarError;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// In-memory implementation of System trait for testing
///
/// `MockSystem` provides an in-memory filesystem and environment,
/// perfect for fast, isolated unit tests without side effects.
///
/// # Example
/// ```
/// use netbox_loader::system::{MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_env("NETBOX_HOME", "/opt/netbox")
///     .with_file("/opt/netbox/lib/core.jar");
///
/// assert_eq!(system.env_var("NETBOX_HOME").unwrap(), "/opt/netbox");
/// assert!(system.is_file(Path::new("/opt/netbox/lib/core.jar")));
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    env_vars: HashMap<String, String>,
    files: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
}

impl MockSystem {
    /// Create a new `MockSystem` with an empty environment and filesystem
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                env_vars: HashMap::new(),
                files: HashSet::new(),
                dirs: HashSet::from([PathBuf::from("/")]),
            })),
        }
    }

    /// Set an environment variable (builder pattern)
    #[must_use]
    pub fn with_env(self, key: &str, value: &str) -> Self {
        {
            let mut state = self.state.write().expect("mock state lock poisoned");
            state.env_vars.insert(key.to_owned(), value.to_owned());
        }
        self
    }

    /// Add an empty file, creating parent directories (builder pattern)
    #[must_use]
    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        let path_buf = path.as_ref().to_path_buf();
        {
            let mut state = self.state.write().expect("mock state lock poisoned");
            add_parent_dirs(&mut state.dirs, &path_buf);
            state.files.insert(path_buf);
        }
        self
    }

    /// Add a directory and its parents (builder pattern)
    #[must_use]
    pub fn with_dir<P: AsRef<Path>>(self, path: P) -> Self {
        let path_buf = path.as_ref().to_path_buf();
        {
            let mut state = self.state.write().expect("mock state lock poisoned");
            add_parent_dirs(&mut state.dirs, &path_buf);
            state.dirs.insert(path_buf);
        }
        self
    }
}

impl Default for MockSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn add_parent_dirs(dirs: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = path.parent();
    while let Some(parent) = current {
        dirs.insert(parent.to_path_buf());
        current = parent.parent();
    }
}

impl System for MockSystem {
    fn env_var(&self, key: &str) -> Result<String, VarError> {
        let state = self.state.read().expect("mock state lock poisoned");
        state.env_vars.get(key).cloned().ok_or(VarError::NotPresent)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let state = self.state.read().expect("mock state lock poisoned");
        if !state.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such directory: {}", path.display()),
            ));
        }

        let mut entries: Vec<PathBuf> = state
            .files
            .iter()
            .chain(state.dirs.iter())
            .filter(|p| p.parent() == Some(path))
            .cloned()
            .collect();
        // HashSet iteration order is arbitrary; give callers a stable view
        entries.sort();
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.read().expect("mock state lock poisoned");
        state.files.contains(path) || state.dirs.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        let state = self.state.read().expect("mock state lock poisoned");
        state.files.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let state = self.state.read().expect("mock state lock poisoned");
        state.dirs.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_vars_round_trip() {
        let system = MockSystem::new().with_env("NETBOX_HOME", "/opt/netbox");
        assert_eq!(system.env_var("NETBOX_HOME").unwrap(), "/opt/netbox");
        assert!(matches!(
            system.env_var("UNSET_VAR"),
            Err(VarError::NotPresent)
        ));
    }

    #[test]
    fn with_file_creates_parents() {
        let system = MockSystem::new().with_file("/opt/netbox/lib/core.jar");
        assert!(system.is_dir(Path::new("/opt/netbox/lib")));
        assert!(system.is_dir(Path::new("/opt/netbox")));
        assert!(system.is_file(Path::new("/opt/netbox/lib/core.jar")));
        assert!(!system.is_dir(Path::new("/opt/netbox/lib/core.jar")));
    }

    #[test]
    fn read_dir_lists_direct_children_only() {
        let system = MockSystem::new()
            .with_file("/opt/netbox/lib/a.jar")
            .with_file("/opt/netbox/lib/sub/b.jar")
            .with_file("/opt/netbox/README");

        let entries = system.read_dir(Path::new("/opt/netbox/lib")).unwrap();
        assert_eq!(
            entries,
            vec![
                PathBuf::from("/opt/netbox/lib/a.jar"),
                PathBuf::from("/opt/netbox/lib/sub"),
            ]
        );
    }

    #[test]
    fn read_dir_missing_directory_errors() {
        let system = MockSystem::new();
        let err = system.read_dir(Path::new("/nowhere")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
