//! Package lookup from `site-packages` directories.
//!
//! Installed distributions leave a metadata directory named
//! `<name>-<version>.dist-info` (wheels) or `<name>-<version>[-pyX.Y].egg-info`
//! (legacy installs). Names are compared after PEP 503 normalization, so
//! `scikit_learn`, `Scikit-Learn` and `scikit.learn` are the same package.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::PackageIndex;

/// Normalize a distribution name: lowercase, runs of `-`, `_`, `.` become `-`.
pub fn normalize_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut in_separator = false;

    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !in_separator {
                normalized.push('-');
            }
            in_separator = true;
        } else {
            normalized.extend(c.to_lowercase());
            in_separator = false;
        }
    }

    normalized
}

/// Split a metadata directory name into `(name, version)`.
fn parse_metadata_dir(file_name: &str) -> Option<(&str, &str)> {
    let stem = file_name
        .strip_suffix(".dist-info")
        .or_else(|| file_name.strip_suffix(".egg-info"))?;

    let (name, rest) = stem.split_once('-')?;
    // egg-info may carry a trailing python tag: foo-1.0-py3.11
    let version = rest.split('-').next().unwrap_or(rest);

    if name.is_empty() || version.is_empty() {
        return None;
    }
    Some((name, version))
}

/// Index built from the metadata directories of `site-packages`.
#[derive(Debug, Clone, Default)]
pub struct SitePackagesIndex {
    versions: BTreeMap<String, String>,
}

impl SitePackagesIndex {
    /// Scan the given directories. Earlier directories win on duplicates.
    pub fn open(dirs: &[PathBuf]) -> Result<Self> {
        let mut versions = BTreeMap::new();

        for dir in dirs {
            for (name, version) in Self::scan_dir(dir)? {
                versions.entry(name).or_insert(version);
            }
        }

        tracing::debug!(
            "Indexed {} distributions from {} site-packages directories",
            versions.len(),
            dirs.len()
        );

        Ok(Self { versions })
    }

    fn scan_dir(dir: &Path) -> Result<Vec<(String, String)>> {
        let mut found = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if let Some((name, version)) = parse_metadata_dir(file_name) {
                found.push((normalize_name(name), version.to_string()));
            }
        }

        Ok(found)
    }

    /// Number of indexed distributions.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Check if no distributions were found.
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl PackageIndex for SitePackagesIndex {
    fn installed_version(&self, module: &str) -> Result<Option<String>> {
        Ok(self.versions.get(&normalize_name(module)).cloned())
    }
}
