//! The resolved configuration a check runs with.

use std::path::PathBuf;

use crate::process::default_python;

use super::schema::{ConfigFile, InstallMode, ReportFormat, VersionPolicy};

/// Everything a dependency check needs, after all layers are applied.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Notebook to scan.
    pub notebook: PathBuf,

    /// Version pins for installs.
    pub versions: VersionPolicy,

    /// Python interpreter for metadata lookups and `pip`.
    pub python: String,

    /// When non-empty, installed packages are read from these directories.
    pub site_packages: Vec<PathBuf>,

    /// How missing modules are handled.
    pub install_mode: InstallMode,

    /// How the report is printed.
    pub format: ReportFormat,

    /// Optional CSV report path.
    pub output: Option<PathBuf>,
}

impl CheckConfig {
    /// Config with built-in defaults for `notebook`.
    pub fn new(notebook: impl Into<PathBuf>) -> Self {
        Self {
            notebook: notebook.into(),
            versions: VersionPolicy::defaults(),
            python: default_python(),
            site_packages: Vec::new(),
            install_mode: InstallMode::default(),
            format: ReportFormat::default(),
            output: None,
        }
    }

    /// Drop the built-in version pins.
    pub fn without_default_pins(mut self) -> Self {
        self.versions = VersionPolicy::new();
        self
    }

    /// Apply a config file layer.
    pub fn apply_file(&mut self, file: &ConfigFile) {
        if let Some(python) = &file.python {
            self.python = python.clone();
        }
        if let Some(mode) = file.install {
            self.install_mode = mode;
        }
        for (module, version) in &file.versions {
            self.versions.pin(module.clone(), version.clone());
        }
        if !file.site_packages.is_empty() {
            self.site_packages = file.site_packages.clone();
        }
        if let Some(output) = &file.output {
            self.output = Some(output.clone());
        }
    }

    /// Apply command-line pins.
    pub fn apply_pins(&mut self, pins: impl IntoIterator<Item = (String, String)>) {
        for (module, version) in pins {
            self.versions.pin(module, version);
        }
    }
}
