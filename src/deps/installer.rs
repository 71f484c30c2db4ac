//! Package installation.

use std::fmt;

use crate::error::Result;
use crate::process::{execute, CommandOptions};

/// A package to install, optionally pinned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSpec {
    pub module: String,
    pub version: Option<String>,
}

impl InstallSpec {
    /// Create a spec for `module`, pinned when `version` is set.
    pub fn new(module: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            module: module.into(),
            version: version.map(str::to_string),
        }
    }
}

impl fmt::Display for InstallSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}=={}", self.module, version),
            None => write!(f, "{}", self.module),
        }
    }
}

/// Something that can install packages into the environment.
pub trait Installer {
    /// Install `spec`. `Ok(false)` means the installer ran and failed.
    fn install(&self, spec: &InstallSpec) -> Result<bool>;
}

/// Installs with `<python> -m pip install <spec>`.
///
/// pip's output is passed through to the terminal.
#[derive(Debug, Clone)]
pub struct PipInstaller {
    python: String,
}

impl PipInstaller {
    /// Create an installer for the given interpreter.
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// Arguments passed to the interpreter.
    pub fn args(spec: &InstallSpec) -> Vec<String> {
        vec![
            "-m".to_string(),
            "pip".to_string(),
            "install".to_string(),
            spec.to_string(),
        ]
    }
}

impl Installer for PipInstaller {
    fn install(&self, spec: &InstallSpec) -> Result<bool> {
        let result = execute(&self.python, &Self::args(spec), &CommandOptions::inherited())?;
        Ok(result.success)
    }
}
