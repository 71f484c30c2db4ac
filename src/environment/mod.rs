//! Installed-package lookup.
//!
//! A [`PackageIndex`] answers one question: which version of a distribution
//! is installed in the target Python environment, if any. Two sources exist:
//!
//! 1. [`InterpreterIndex`] asks the interpreter through `importlib.metadata`
//! 2. [`SitePackagesIndex`] reads `*.dist-info` / `*.egg-info` directory names
//!    from one or more `site-packages` directories without running Python

pub mod interpreter;
pub mod site_packages;

pub use interpreter::InterpreterIndex;
pub use site_packages::{normalize_name, SitePackagesIndex};

use crate::error::Result;

/// Read-only view of an environment's installed packages.
pub trait PackageIndex {
    /// Look up the installed version of `module`.
    ///
    /// Returns `Ok(None)` when the package is not installed. Errors are
    /// reserved for failures to query the environment at all.
    fn installed_version(&self, module: &str) -> Result<Option<String>>;
}
