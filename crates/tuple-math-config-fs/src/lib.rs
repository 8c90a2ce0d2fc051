// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed `ConfigStore` for tuple-math (uses platform config dir).
//!
//! Saves go through a sibling `.tmp` file that is renamed over the target, so
//! a reader never observes a half-written document.

use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tuple_math::config::{ConfigError, ConfigStore};

/// Store configs as JSON files under a base directory.
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Create a store rooted at the user config directory (e.g., `~/.config/tuple-math`).
    pub fn new() -> Result<Self, ConfigError> {
        let proj = ProjectDirs::from("dev", "flyingrobots", "tuple-math")
            .ok_or_else(|| ConfigError::Other("could not resolve config dir".into()))?;
        Self::at(proj.config_dir())
    }

    /// Create a store rooted at `base`, creating the directory if needed.
    pub fn at(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let base = base.as_ref().to_path_buf();
        fs::create_dir_all(&base)?;
        debug!(dir = %base.display(), "opened config store");
        Ok(Self { base })
    }

    /// Directory the store reads and writes.
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let filename = format!("{key}.json");
        self.base.join(filename)
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let path = self.path_for(key);
        match fs::read(path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(ConfigError::NotFound),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let staging = path.with_extension("json.tmp");
        if let Err(err) = fs::write(&staging, data).and_then(|()| fs::rename(&staging, &path)) {
            warn!(path = %path.display(), error = %err, "config save failed");
            // Best-effort cleanup.
            let _ = fs::remove_file(&staging);
            return Err(ConfigError::Io(err));
        }
        debug!(path = %path.display(), bytes = data.len(), "saved config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuple_math::config::{ConfigService, MathConfig};
    use tuple_math::ProviderKind;

    #[test]
    fn math_config_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::new(FsConfigStore::at(dir.path()).unwrap());

        let config = MathConfig {
            provider: ProviderKind::Libm,
            zero_tolerance: 1e-4,
        };
        service.save_math(&config).unwrap();
        assert!(dir.path().join("math.json").exists());
        assert_eq!(service.load_math().unwrap(), config);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::new(FsConfigStore::at(dir.path()).unwrap());
        assert_eq!(service.load_math().unwrap(), MathConfig::default());
    }

    #[test]
    fn saves_replace_the_file_without_leaving_staging_files() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::new(FsConfigStore::at(dir.path()).unwrap());

        service.save_math(&MathConfig::default()).unwrap();
        let fast = MathConfig {
            provider: ProviderKind::Fast,
            ..MathConfig::default()
        };
        service.save_math(&fast).unwrap();

        assert_eq!(service.load_math().unwrap(), fast);
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("math.json")]);
    }

    #[test]
    fn save_into_a_directory_path_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsConfigStore::at(dir.path()).unwrap();
        fs::create_dir(dir.path().join("math.json")).unwrap();
        assert!(matches!(
            store.save_raw("math", b"{}"),
            Err(ConfigError::Io(_))
        ));
        assert!(!dir.path().join("math.json.tmp").exists());
    }

    #[test]
    fn malformed_file_is_a_serde_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsConfigStore::at(dir.path()).unwrap();
        store.save_raw("math", b"{ not json").unwrap();
        let service = ConfigService::new(store);
        assert!(matches!(service.load_math(), Err(ConfigError::Serde(_))));
    }
}
