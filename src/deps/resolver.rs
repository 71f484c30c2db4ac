//! Dependency resolution.
//!
//! For each discovered module the resolver asks the [`PackageIndex`] for an
//! installed version. A missing module enters the install loop: the user is
//! asked until they answer yes or no, and a yes runs the [`Installer`].
//! Installer failures are reported and the resolver moves on to the next
//! module.

use std::collections::BTreeSet;

use crate::config::{InstallMode, VersionPolicy};
use crate::environment::PackageIndex;
use crate::error::Result;
use crate::ui::{Prompt, UserInterface};

use super::entry::{DependencyEntry, InstallAction};
use super::installer::{InstallSpec, Installer};

/// A valid answer to the install question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Parse `yes`/`y`/`no`/`n`, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "yes" | "y" => Some(Self::Yes),
            "no" | "n" => Some(Self::No),
            _ => None,
        }
    }
}

/// Question asked for a missing module.
pub fn install_question(module: &str, version: Option<&str>) -> String {
    match version {
        Some(version) => format!(
            "Module '{}' is missing. Do you want to install {} v. {}? (yes/no)",
            module, module, version
        ),
        None => format!(
            "Module '{}' is missing. Do you want to install the latest version of {}? (yes/no)",
            module, module
        ),
    }
}

/// Resolves modules against an environment and installs missing ones.
pub struct Resolver<'a> {
    index: &'a dyn PackageIndex,
    installer: &'a dyn Installer,
    versions: &'a VersionPolicy,
    mode: InstallMode,
}

impl<'a> Resolver<'a> {
    /// Create a resolver.
    pub fn new(
        index: &'a dyn PackageIndex,
        installer: &'a dyn Installer,
        versions: &'a VersionPolicy,
        mode: InstallMode,
    ) -> Self {
        Self {
            index,
            installer,
            versions,
            mode,
        }
    }

    /// Resolve every module, in set order.
    pub fn resolve(
        &self,
        modules: &BTreeSet<String>,
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<DependencyEntry>> {
        let mut entries = Vec::with_capacity(modules.len());
        for module in modules {
            entries.push(self.resolve_module(module, ui)?);
        }
        Ok(entries)
    }

    /// Resolve a single module.
    pub fn resolve_module(
        &self,
        module: &str,
        ui: &mut dyn UserInterface,
    ) -> Result<DependencyEntry> {
        if let Some(version) = self.index.installed_version(module)? {
            if ui.output_mode().shows_details() {
                ui.message(&format!("{} {} is installed", module, version));
            }
            return Ok(DependencyEntry::present(module, version));
        }

        let target = self.versions.get(module);
        let answer = match self.mode {
            InstallMode::Prompt => self.ask(module, target, ui)?,
            InstallMode::Always => Answer::Yes,
            InstallMode::Never => Answer::No,
        };

        let action = match answer {
            Answer::Yes => self.install(&InstallSpec::new(module, target), ui),
            Answer::No => {
                ui.message(&format!("Skipping installation of {}.", module));
                InstallAction::Skipped
            }
        };

        Ok(DependencyEntry::missing(module, action))
    }

    /// Ask until a valid answer is given.
    fn ask(
        &self,
        module: &str,
        target: Option<&str>,
        ui: &mut dyn UserInterface,
    ) -> Result<Answer> {
        let prompt = Prompt::new(
            format!("install_{}", module),
            install_question(module, target),
        );

        loop {
            let input = ui.prompt(&prompt)?;
            match Answer::parse(&input) {
                Some(answer) => return Ok(answer),
                None => ui.warning("Invalid input. Please enter 'yes' or 'no'."),
            }
        }
    }

    fn install(&self, spec: &InstallSpec, ui: &mut dyn UserInterface) -> InstallAction {
        ui.message(&format!("Installing {}...", spec));

        match self.installer.install(spec) {
            Ok(true) => {
                ui.success(&format!("Successfully installed {}.", spec));
                InstallAction::Installed
            }
            Ok(false) => {
                tracing::debug!("Installer exited unsuccessfully for {}", spec);
                ui.warning(&format!("Failed to install {}.", spec));
                InstallAction::InstallFailed
            }
            Err(e) => {
                tracing::debug!("Installer could not run for {}: {}", spec, e);
                ui.warning(&format!("Failed to install {}.", spec));
                InstallAction::InstallFailed
            }
        }
    }
}
