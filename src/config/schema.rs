//! Configuration schema definitions.
//!
//! These structs map to the YAML config file format:
//!
//! ```yaml
//! python: /opt/venv/bin/python
//! install: prompt
//! versions:
//!   seaborn: 0.12.1
//!   xgboost: 1.7.2
//! site_packages:
//!   - /opt/venv/lib/python3.11/site-packages
//! output: dependency_report.csv
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Built-in version pins.
pub const DEFAULT_VERSIONS: &[(&str, &str)] = &[
    ("seaborn", "0.12.1"),
    ("sklearn", "1.2.0"),
    ("xgboost", "1.7.2"),
];

/// Root structure of `nbdeps.yml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Python interpreter used for lookups and installs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,

    /// How missing modules are handled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install: Option<InstallMode>,

    /// Version pins by module name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub versions: BTreeMap<String, String>,

    /// Read installed packages from these directories instead of asking
    /// the interpreter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub site_packages: Vec<PathBuf>,

    /// Write the report as CSV to this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

/// How missing modules are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallMode {
    /// Ask before installing each missing module.
    #[default]
    Prompt,
    /// Install every missing module without asking.
    Always,
    /// Never install; only report.
    Never,
}

/// How the report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Box-drawn table.
    #[default]
    Table,
    /// JSON array of entries.
    Json,
}

/// Desired version per module.
///
/// Used for the install prompt text and the installer's version pin. Never
/// checked against a package registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionPolicy {
    pins: BTreeMap<String, String>,
}

impl VersionPolicy {
    /// An empty policy: every module installs at its latest version.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in pins.
    pub fn defaults() -> Self {
        let mut policy = Self::new();
        for (module, version) in DEFAULT_VERSIONS {
            policy.pin(*module, *version);
        }
        policy
    }

    /// Pin `module` to `version`, replacing any earlier pin.
    pub fn pin(&mut self, module: impl Into<String>, version: impl Into<String>) {
        self.pins.insert(module.into(), version.into());
    }

    /// Pinned version for `module`.
    pub fn get(&self, module: &str) -> Option<&str> {
        self.pins.get(module).map(|v| v.as_str())
    }

    /// Number of pinned modules.
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Check if nothing is pinned.
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_contain_builtin_pins() {
        let policy = VersionPolicy::defaults();
        assert_eq!(policy.len(), 3);
        assert_eq!(policy.get("seaborn"), Some("0.12.1"));
        assert_eq!(policy.get("sklearn"), Some("1.2.0"));
        assert_eq!(policy.get("xgboost"), Some("1.7.2"));
        assert_eq!(policy.get("numpy"), None);
    }

    #[test]
    fn pin_replaces_existing() {
        let mut policy = VersionPolicy::defaults();
        policy.pin("seaborn", "0.13.2");
        assert_eq!(policy.get("seaborn"), Some("0.13.2"));
        assert_eq!(policy.len(), 3);
    }

    #[test]
    fn config_file_parses_all_fields() {
        let yaml = r#"
python: /opt/venv/bin/python
install: never
versions:
  numpy: "1.26.4"
site_packages:
  - /opt/venv/lib/python3.11/site-packages
output: report.csv
"#;
        let file: ConfigFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.python.as_deref(), Some("/opt/venv/bin/python"));
        assert_eq!(file.install, Some(InstallMode::Never));
        assert_eq!(file.versions.get("numpy").map(|s| s.as_str()), Some("1.26.4"));
        assert_eq!(file.site_packages.len(), 1);
        assert_eq!(file.output, Some(PathBuf::from("report.csv")));
    }

    #[test]
    fn config_file_rejects_unknown_fields() {
        let result: Result<ConfigFile, _> = serde_yaml::from_str("pythn: python3");
        assert!(result.is_err());
    }

    #[test]
    fn install_mode_default_is_prompt() {
        assert_eq!(InstallMode::default(), InstallMode::Prompt);
    }

    #[test]
    fn report_format_default_is_table() {
        assert_eq!(ReportFormat::default(), ReportFormat::Table);
    }
}
