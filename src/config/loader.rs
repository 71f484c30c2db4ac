//! Configuration file discovery and loading.

use crate::config::schema::ConfigFile;
use crate::error::{NbdepsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names looked up in the working directory, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["nbdeps.yml", ".nbdeps.yml"];

/// Find a config file in `dir`.
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load and parse a config file.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            NbdepsError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            NbdepsError::Io(e)
        }
    })?;

    tracing::debug!("Loaded config from {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into a [`ConfigFile`].
///
/// An empty file is a valid, empty config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ConfigFile> {
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str(content).map_err(|e| NbdepsError::ConfigParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse a `MODULE=VERSION` pin from the command line.
pub fn parse_pin(value: &str) -> Result<(String, String)> {
    let invalid = || NbdepsError::InvalidPin {
        value: value.to_string(),
    };

    let (module, version) = value.split_once('=').ok_or_else(invalid)?;
    let module = module.trim();
    // Accept pip's `==` spelling too.
    let version = version.trim_start_matches('=').trim();

    if module.is_empty() || version.is_empty() {
        return Err(invalid());
    }

    Ok((module.to_string(), version.to_string()))
}
