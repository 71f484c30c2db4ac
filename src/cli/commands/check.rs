//! Check command implementation.
//!
//! The `nbdeps check` command scans a notebook, reports which imported
//! modules are installed, and offers to install the missing ones.

use std::path::{Path, PathBuf};

use crate::check::run_check;
use crate::cli::args::CheckArgs;
use crate::config::{discover_config, load_config_file, parse_pin, CheckConfig, InstallMode};
use crate::deps::PipInstaller;
use crate::environment::{InterpreterIndex, PackageIndex, SitePackagesIndex};
use crate::error::{NbdepsError, Result};
use crate::notebook::Notebook;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_MISSING, EXIT_NOT_FOUND};

/// The check command implementation.
pub struct CheckCommand {
    working_dir: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(working_dir: &Path, config_path: Option<PathBuf>, args: CheckArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Build the check configuration from defaults, config file and flags.
    pub fn resolve_config(&self) -> Result<CheckConfig> {
        let mut config = CheckConfig::new(&self.args.notebook);
        if self.args.no_default_pins {
            config = config.without_default_pins();
        }

        let config_file = match &self.config_path {
            Some(path) => Some(path.clone()),
            None => discover_config(&self.working_dir),
        };
        if let Some(path) = config_file {
            config.apply_file(&load_config_file(&path)?);
        }

        let pins = self
            .args
            .pin
            .iter()
            .map(|p| parse_pin(p))
            .collect::<Result<Vec<_>>>()?;
        config.apply_pins(pins);

        if let Some(python) = &self.args.python {
            config.python = python.clone();
        }
        if !self.args.site_packages.is_empty() {
            config.site_packages = self.args.site_packages.clone();
        }
        if self.args.yes {
            config.install_mode = InstallMode::Always;
        } else if self.args.no_install {
            config.install_mode = InstallMode::Never;
        }
        if let Some(format) = self.args.format {
            config.format = format;
        }
        if let Some(output) = &self.args.output {
            config.output = Some(output.clone());
        }

        tracing::debug!("Resolved check config: {:?}", config);
        Ok(config)
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.resolve_config()?;

        let notebook = match Notebook::load(&config.notebook) {
            Ok(notebook) => notebook,
            Err(e @ NbdepsError::NotebookNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_NOT_FOUND));
            }
            Err(e) => return Err(e),
        };

        let index: Box<dyn PackageIndex> = if config.site_packages.is_empty() {
            Box::new(InterpreterIndex::new(config.python.clone()))
        } else {
            Box::new(SitePackagesIndex::open(&config.site_packages)?)
        };
        let installer = PipInstaller::new(config.python.clone());

        let entries = run_check(&config, &notebook, index.as_ref(), &installer, ui)?;

        if self.args.strict && entries.iter().any(|e| !e.installed) {
            return Ok(CommandResult::failure(EXIT_MISSING));
        }

        Ok(CommandResult::success())
    }
}
