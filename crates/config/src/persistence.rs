//! Config file reading and writing.
//!
//! Configuration files are JSON5 (plain JSON is valid JSON5, so both
//! extensions are accepted). Files are searched in the current directory
//! first, then the user's config directory.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ConfigError, Result};

/// File names probed in the working directory.
const LOCAL_FILES: [&str; 2] = ["taskdeck.json5", "taskdeck.json"];

/// File names probed under the user config directory.
const USER_FILES: [&str; 2] = ["config.json5", "config.json"];

/// Returns the first existing config file, if any.
///
/// Search order:
///
/// 1. `./taskdeck.json5`, `./taskdeck.json`
/// 2. `<config dir>/taskdeck/config.json5`, `<config dir>/taskdeck/config.json`
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    for name in LOCAL_FILES {
        let path = PathBuf::from(name);
        if path.is_file() {
            return Some(path);
        }
    }

    let user_dir = dirs::config_dir()?.join("taskdeck");
    for name in USER_FILES {
        let path = user_dir.join(name);
        if path.is_file() {
            return Some(path);
        }
    }

    None
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_config_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json5::from_str(&contents)?)
}

/// Serializes and writes a configuration file as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_config_file<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let contents = serde_json::to_string_pretty(value)?;
    std::fs::write(path, contents).map_err(|source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
