//! Launcher settings resolved from the environment

use crate::error::LoaderError;
use crate::system::System;
use anyhow::Result;
use std::path::PathBuf;

/// Environment variable naming the NetBox installation root
pub const HOME_VAR: &str = "NETBOX_HOME";

/// Settings for a single launcher invocation
///
/// Populated once at process start instead of consulting the environment
/// from the middle of the code. `home` comes from `NETBOX_HOME`; `java`
/// comes from the CLI (which itself honors `NETBOX_JAVA`).
#[derive(Debug, Clone)]
pub struct Settings {
    /// NetBox installation root directory
    pub home: PathBuf,
    /// JVM launcher executable to invoke
    pub java: String,
}

impl Settings {
    /// Resolve settings from the host environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `NETBOX_HOME` is unset or empty.
    /// The installation root is not otherwise validated: a home without a
    /// `lib/` directory simply yields an empty classpath later on.
    pub fn from_system(system: &dyn System, java: String) -> Result<Self> {
        let home = match system.env_var(HOME_VAR) {
            Ok(value) if !value.is_empty() => PathBuf::from(value),
            _ => {
                return Err(LoaderError::configuration(format!(
                    "{HOME_VAR} environment variable is not set. Aborting."
                ))
                .into());
            }
        };

        Ok(Self { home, java })
    }

    /// Directory scanned for the archive files that make up the classpath
    #[must_use]
    pub fn lib_dir(&self) -> PathBuf {
        self.home.join("lib")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    #[test]
    fn resolves_home_from_environment() {
        let system = MockSystem::new().with_env(HOME_VAR, "/opt/netbox");
        let settings = Settings::from_system(&system, "java".to_owned()).unwrap();

        assert_eq!(settings.home, PathBuf::from("/opt/netbox"));
        assert_eq!(settings.lib_dir(), PathBuf::from("/opt/netbox/lib"));
        assert_eq!(settings.java, "java");
    }

    #[test]
    fn missing_home_is_a_configuration_error() {
        let system = MockSystem::new();
        let err = Settings::from_system(&system, "java".to_owned()).unwrap_err();

        let loader_err = err.downcast_ref::<LoaderError>().unwrap();
        assert_eq!(loader_err.exit_code(), 1);
        assert!(loader_err.to_string().contains(HOME_VAR));
    }

    #[test]
    fn empty_home_is_a_configuration_error() {
        let system = MockSystem::new().with_env(HOME_VAR, "");
        let err = Settings::from_system(&system, "java".to_owned()).unwrap_err();

        assert!(err.downcast_ref::<LoaderError>().is_some());
    }

    #[test]
    fn custom_jvm_launcher_is_kept() {
        let system = MockSystem::new().with_env(HOME_VAR, "/opt/netbox");
        let settings = Settings::from_system(&system, "/usr/lib/jvm/bin/java".to_owned()).unwrap();

        assert_eq!(settings.java, "/usr/lib/jvm/bin/java");
    }
}
