//! Dependency report entries.

use serde::Serialize;

/// What the install loop did for a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallAction {
    /// Module was already installed.
    None,
    /// Installer ran and succeeded.
    Installed,
    /// Installer ran and failed.
    InstallFailed,
    /// User declined, or installs are disabled.
    Skipped,
}

impl InstallAction {
    /// Label used in table and CSV output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "-",
            Self::Installed => "installed",
            Self::InstallFailed => "install failed",
            Self::Skipped => "skipped",
        }
    }
}

/// One report row per discovered module.
///
/// `installed` and `version` describe the environment as found, before any
/// install this run performed; `action` records what happened afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyEntry {
    pub module: String,
    pub installed: bool,
    pub version: Option<String>,
    pub action: InstallAction,
}

impl DependencyEntry {
    /// Entry for a module found in the environment.
    pub fn present(module: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            installed: true,
            version: Some(version.into()),
            action: InstallAction::None,
        }
    }

    /// Entry for a module missing from the environment.
    pub fn missing(module: impl Into<String>, action: InstallAction) -> Self {
        Self {
            module: module.into(),
            installed: false,
            version: None,
            action,
        }
    }
}
