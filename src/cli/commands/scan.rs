//! Scan command implementation.
//!
//! The `nbdeps scan` command lists a notebook's top-level imports without
//! touching the Python environment.

use crate::cli::args::ScanArgs;
use crate::error::{NbdepsError, Result};
use crate::notebook::{scan_imports, Notebook};
use crate::ui::UserInterface;

use anyhow::Context;

use super::dispatcher::{Command, CommandResult, EXIT_NOT_FOUND};

/// The scan command implementation.
pub struct ScanCommand {
    args: ScanArgs,
}

impl ScanCommand {
    /// Create a new scan command.
    pub fn new(args: ScanArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ScanArgs {
        &self.args
    }
}

impl Command for ScanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let notebook = match Notebook::load(&self.args.notebook) {
            Ok(nb) => nb,
            Err(e @ NbdepsError::NotebookNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_NOT_FOUND));
            }
            Err(e) => return Err(e),
        };

        let imports = scan_imports(&notebook);

        if self.args.json {
            let json = serde_json::to_string_pretty(&imports)
                .context("Failed to serialize import list")?;
            ui.show_report(&json);
        } else if !imports.is_empty() {
            let list: Vec<&str> = imports.iter().map(|s| s.as_str()).collect();
            ui.show_report(&list.join("\n"));
        }

        Ok(CommandResult::success())
    }
}
