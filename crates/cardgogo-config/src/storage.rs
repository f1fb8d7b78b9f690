//! File persistence for the configuration store.
//!
//! Reads and writes the store to the platform-appropriate config file:
//! - Windows:  `%APPDATA%\CardGogo\config.cfg`
//! - Linux:    `~/.config/cardgogo/config.cfg`
//! - macOS:    `~/Library/Application Support/CardGogo/config.cfg`
//!
//! The file body is the crate's own `key=value\n` format (see
//! [`crate::codec`]); no header or encoding declaration is written. The
//! stream-based API in [`crate::store`] stays agnostic of files; everything
//! filesystem-shaped lives here.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::error::ConfigError;
use crate::store::ConfigStore;

/// File name of the persisted configuration inside the app config directory.
const CONFIG_FILE_NAME: &str = "config.cfg";

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents could not be streamed through the codec.
    #[error(transparent)]
    Codec(#[from] ConfigError),
}

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`StorageError::NoPlatformConfigDir`] when the base directory
/// cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, StorageError> {
    platform_config_dir().ok_or(StorageError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`StorageError::NoPlatformConfigDir`] if the base directory
/// cannot be determined.
pub fn config_file_path() -> Result<PathBuf, StorageError> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the store from the platform config file, returning the default set
/// when the file does not yet exist.
///
/// # Errors
///
/// Returns [`StorageError::Io`] for file-system errors other than
/// "not found", and [`StorageError::Codec`] if the stream read fails.
pub fn load_config() -> Result<ConfigStore, StorageError> {
    let path = config_file_path()?;
    load_config_from(path)
}

/// Loads the store from `path`, returning the default set when the file
/// does not exist.
///
/// # Errors
///
/// Same contract as [`load_config`].
pub fn load_config_from<P: AsRef<Path>>(path: P) -> Result<ConfigStore, StorageError> {
    let path = path.as_ref();

    match File::open(path) {
        Ok(file) => {
            let store = ConfigStore::from_reader(file)?;
            debug!(path = %path.display(), entries = store.len(), "config loaded");
            Ok(store)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(ConfigStore::new())
        }
        Err(source) => Err(StorageError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Persists `store` to the platform config file.
///
/// Creates the config directory if it does not exist.
///
/// # Errors
///
/// Returns [`StorageError::Io`] for file-system failures or
/// [`StorageError::Codec`] if the stream write fails.
pub fn save_config(store: &ConfigStore) -> Result<(), StorageError> {
    let path = config_file_path()?;
    save_config_to(store, path)
}

/// Persists `store` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Same contract as [`save_config`].
pub fn save_config_to<P: AsRef<Path>>(store: &ConfigStore, path: P) -> Result<(), StorageError> {
    let path = path.as_ref();

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| StorageError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let file = File::create(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    store.write_to(&mut writer)?;
    writer.flush().map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), entries = store.len(), "config saved");
    Ok(())
}

/// Resolves the platform config base directory including the app subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("CardGogo"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("cardgogo"))
    }

    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/CardGogo
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("CardGogo")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("cardgogo_test_{}", Uuid::new_v4()))
            .join(CONFIG_FILE_NAME)
    }

    #[test]
    fn test_load_from_missing_path_yields_defaults() {
        // Arrange
        let path = temp_path();

        // Act
        let store = load_config_from(&path).unwrap();

        // Assert
        assert_eq!(store, ConfigStore::new());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        // Arrange
        let path = temp_path();
        let mut store = ConfigStore::new();
        store.set("day_starts_at", "5");

        // Act
        save_config_to(&store, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();

        // Assert
        assert_eq!(loaded, store);
        assert_eq!(loaded.day_starts_at().unwrap(), 5);

        // Cleanup
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_save_creates_missing_directories() {
        // Arrange – the parent directory does not exist yet
        let path = temp_path();
        assert!(!path.parent().unwrap().exists());

        // Act
        save_config_to(&ConfigStore::new(), &path).unwrap();

        // Assert
        assert!(path.exists());

        // Cleanup
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_saved_file_is_plain_key_value_text() {
        // Arrange
        let path = temp_path();

        // Act
        save_config_to(&ConfigStore::new(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        // Assert – sorted key order, one record per line
        assert_eq!(
            content,
            "day_starts_at=3\ngrade_0_items_at_once=10\nlogging=1\nsorting=1\n"
        );

        // Cleanup
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_config_file_path_ends_with_file_name() {
        let path_result = config_file_path();
        if let Ok(path) = path_result {
            // Spelled out rather than written via CONFIG_FILE_NAME: existing
            // installs look for exactly this name, so a constant rename must
            // fail here.
            assert!(
                path.ends_with("config.cfg"),
                "config file must be named config.cfg, got {path:?}"
            );
        }
        // NoPlatformConfigDir (e.g. in a stripped CI env) is also acceptable.
    }

    #[test]
    fn test_platform_config_dir_returns_some_on_this_platform() {
        let result = platform_config_dir();
        #[cfg(target_os = "windows")]
        if std::env::var_os("APPDATA").is_some() {
            assert!(result.is_some());
        }
        #[cfg(target_os = "linux")]
        {
            let has_xdg = std::env::var_os("XDG_CONFIG_HOME").is_some();
            let has_home = std::env::var_os("HOME").is_some();
            if has_xdg || has_home {
                assert!(result.is_some());
            }
        }
        #[cfg(target_os = "macos")]
        if std::env::var_os("HOME").is_some() {
            assert!(result.is_some());
        }
        #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
        assert!(result.is_none());
    }
}
