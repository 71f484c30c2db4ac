//! End-to-end dependency check.
//!
//! Scan a loaded notebook's imports, resolve each against the environment,
//! then print (and optionally save) the report.

use crate::config::{CheckConfig, ReportFormat};
use crate::deps::{DependencyEntry, Installer, Resolver};
use crate::environment::PackageIndex;
use crate::error::Result;
use crate::notebook::{scan_imports, Notebook};
use crate::report::{render_table, summary_line, to_json, write_csv};
use crate::ui::UserInterface;

/// Run a full check of `notebook` and return the report entries.
pub fn run_check(
    config: &CheckConfig,
    notebook: &Notebook,
    index: &dyn PackageIndex,
    installer: &dyn Installer,
    ui: &mut dyn UserInterface,
) -> Result<Vec<DependencyEntry>> {
    let modules = scan_imports(notebook);

    let show_status = config.format == ReportFormat::Table;

    if show_status {
        ui.show_header(&format!("Checking {}", config.notebook.display()));
    }
    if ui.output_mode().shows_details() {
        let list: Vec<&str> = modules.iter().map(|s| s.as_str()).collect();
        ui.message(&format!("Imports: {}", list.join(", ")));
    }

    let resolver = Resolver::new(index, installer, &config.versions, config.install_mode);
    let entries = resolver.resolve(&modules, ui)?;

    match config.format {
        ReportFormat::Table => {
            ui.show_report(&render_table(&entries));
            ui.message(&summary_line(&entries));
        }
        ReportFormat::Json => ui.show_report(&to_json(&entries)?),
    }

    if let Some(output) = &config.output {
        write_csv(output, &entries)?;
        if show_status {
            ui.success(&format!("Report written to {}", output.display()));
        }
    }

    Ok(entries)
}
